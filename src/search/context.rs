//! Depth-bounded minimax and alpha-beta.
//!
//! Each search is split into a root driver, which remembers which move
//! produced the best score, and a recursive value function that only
//! returns scores. The value function polls the time probe before doing
//! anything else and bails out with [`SearchTimeout`] through `?`.

use crate::board::{GameState, Move, Player};
use crate::evaluation::Evaluator;
use crate::timer::TimeProbe;

use super::{SearchMethod, SearchResult, SearchTimeout};

/// Per-call search state: the evaluator, this turn's time probe, and a node
/// counter. Built fresh for every move decision and dropped afterwards.
pub struct SearchContext<'a, E> {
    evaluator: &'a E,
    probe: &'a dyn TimeProbe,
    timeout_ms: f64,
    nodes: u64,
}

impl<'a, E> SearchContext<'a, E> {
    #[must_use]
    pub fn new(evaluator: &'a E, probe: &'a dyn TimeProbe, timeout_ms: f64) -> Self {
        SearchContext {
            evaluator,
            probe,
            timeout_ms,
            nodes: 0,
        }
    }

    /// Value-function calls made so far, across every search run on this context.
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    fn check_time(&self) -> Result<(), SearchTimeout> {
        if self.probe.time_left() < self.timeout_ms {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    /// Run `method` to a fixed `depth` with a full window.
    pub fn search<S>(
        &mut self,
        state: &S,
        method: SearchMethod,
        depth: u32,
    ) -> Result<SearchResult, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        match method {
            SearchMethod::Minimax => self.minimax(state, depth, true),
            SearchMethod::AlphaBeta => self.alphabeta(state, depth, f64::NEG_INFINITY, true),
        }
    }

    /// Minimax to `depth` plies, scored for the player to move in `state`.
    ///
    /// With no legal moves at the root this returns `(0, Move::NONE)`; deeper
    /// dead ends are scored by the evaluator instead. Ties keep the first
    /// move in enumeration order, and a root whose every child scores `-inf`
    /// reports `(-inf, Move::NONE)`.
    pub fn minimax<S>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchResult, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult::NO_MOVE);
        }
        let player = state.active_player();

        let mut best = SearchResult::new(f64::NEG_INFINITY, Move::NONE);
        for mv in moves {
            let child = state.forecast_move(mv);
            let score = self.minimax_value(&child, player, depth.saturating_sub(1), !maximizing)?;
            if score > best.score {
                best = SearchResult::new(score, mv);
            }
        }
        Ok(best)
    }

    fn minimax_value<S>(
        &mut self,
        state: &S,
        player: Player,
        depth: u32,
        maximizing: bool,
    ) -> Result<f64, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.check_time()?;
        self.nodes += 1;

        let moves = state.legal_moves();
        if depth == 0 || moves.is_empty() {
            return Ok(self.evaluator.score(state, player));
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            let score = self.minimax_value(&state.forecast_move(mv), player, depth - 1, !maximizing)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }

    /// Alpha-beta to `depth` plies, scored for the player to move in `state`.
    ///
    /// The root explores every child: it raises `alpha` as results come in
    /// but hands each child a fresh `+inf` beta and never cuts off, so the
    /// chosen move and score match [`minimax`](Self::minimax). Pruning only
    /// happens below the root.
    ///
    /// Since the root never compares against beta it takes no beta argument;
    /// the full-window call is `alphabeta(state, depth, f64::NEG_INFINITY, true)`.
    /// `alpha` seeds the running lower bound, so a caller-supplied bound
    /// above `-inf` lets children that cannot beat it return early.
    pub fn alphabeta<S>(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        maximizing: bool,
    ) -> Result<SearchResult, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult::NO_MOVE);
        }
        let player = state.active_player();

        let mut alpha = alpha;
        let mut best = SearchResult::new(f64::NEG_INFINITY, Move::NONE);
        for mv in moves {
            let child = state.forecast_move(mv);
            let score = self.alphabeta_value(
                &child,
                player,
                depth.saturating_sub(1),
                alpha,
                f64::INFINITY,
                !maximizing,
            )?;
            if score > best.score {
                best = SearchResult::new(score, mv);
            }
            alpha = alpha.max(best.score);
        }
        Ok(best)
    }

    fn alphabeta_value<S>(
        &mut self,
        state: &S,
        player: Player,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<f64, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.check_time()?;
        self.nodes += 1;

        let moves = state.legal_moves();
        if depth == 0 || moves.is_empty() {
            return Ok(self.evaluator.score(state, player));
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                let child = state.forecast_move(mv);
                best = best.max(self.alphabeta_value(&child, player, depth - 1, alpha, beta, false)?);
                if best >= beta {
                    return Ok(best);
                }
                alpha = alpha.max(best);
            }
            Ok(best)
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                let child = state.forecast_move(mv);
                best = best.min(self.alphabeta_value(&child, player, depth - 1, alpha, beta, true)?);
                if best <= alpha {
                    return Ok(best);
                }
                beta = beta.min(best);
            }
            Ok(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, IsolationBoard};
    use crate::evaluation::{custom_score, improved_score};
    use crate::timer::CountdownProbe;

    fn plenty() -> f64 {
        1_000.0
    }

    fn midgame() -> IsolationBoard {
        BoardBuilder::new(5, 5)
            .place(Player::One, Move(2, 2))
            .place(Player::Two, Move(0, 0))
            .block_all([Move(1, 1), Move(3, 4), Move(4, 0)])
            .build()
            .unwrap()
    }

    #[test]
    fn test_no_legal_moves_at_root() {
        let state = BoardBuilder::new(5, 5)
            .place(Player::One, Move(0, 0))
            .place(Player::Two, Move(4, 4))
            .block_all([Move(1, 2), Move(2, 1)])
            .build()
            .unwrap();
        let eval = custom_score::<IsolationBoard>;
        let probe = plenty;
        let mut ctx = SearchContext::new(&eval, &probe, 10.0);

        assert_eq!(ctx.minimax(&state, 3, true), Ok(SearchResult::NO_MOVE));
        assert_eq!(
            ctx.alphabeta(&state, 3, f64::NEG_INFINITY, true),
            Ok(SearchResult::NO_MOVE)
        );
        assert_eq!(ctx.nodes(), 0);
    }

    #[test]
    fn test_depth_one_scores_children_with_evaluator() {
        let state = midgame();
        let eval = improved_score::<IsolationBoard>;
        let probe = plenty;
        let mut ctx = SearchContext::new(&eval, &probe, 10.0);

        let result = ctx.minimax(&state, 1, true).unwrap();

        let expected = state
            .legal_moves()
            .into_iter()
            .map(|mv| improved_score(&state.forecast_move(mv), Player::One))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.score, expected);
        assert_eq!(ctx.nodes(), state.legal_moves().len() as u64);
    }

    #[test]
    fn test_alphabeta_matches_minimax_and_prunes() {
        let state = midgame();
        let eval = improved_score::<IsolationBoard>;
        let probe = plenty;

        for depth in 1..=5 {
            let mut mm = SearchContext::new(&eval, &probe, 10.0);
            let mut ab = SearchContext::new(&eval, &probe, 10.0);
            let expected = mm.minimax(&state, depth, true).unwrap();
            let actual = ab.alphabeta(&state, depth, f64::NEG_INFINITY, true).unwrap();
            assert_eq!(actual, expected, "depth {depth}");
            if depth == 1 {
                assert_eq!(ab.nodes(), mm.nodes());
            } else {
                assert!(ab.nodes() < mm.nodes(), "depth {depth}");
            }
        }
    }

    #[test]
    fn test_all_losing_children_report_no_move() {
        let state = BoardBuilder::new(5, 5)
            .place(Player::One, Move(2, 2))
            .place(Player::Two, Move(0, 0))
            .build()
            .unwrap();
        let eval = |_: &IsolationBoard, _: Player| f64::NEG_INFINITY;
        let probe = plenty;

        for depth in 1..=3 {
            let mut ctx = SearchContext::new(&eval, &probe, 10.0);
            let lost = SearchResult::new(f64::NEG_INFINITY, Move::NONE);
            assert_eq!(ctx.minimax(&state, depth, true), Ok(lost), "depth {depth}");
            assert_eq!(
                ctx.alphabeta(&state, depth, f64::NEG_INFINITY, true),
                Ok(lost),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn test_timeout_before_any_node() {
        let state = midgame();
        let eval = custom_score::<IsolationBoard>;
        let probe = || 5.0;
        let mut ctx = SearchContext::new(&eval, &probe, 10.0);

        assert_eq!(ctx.minimax(&state, 1, true), Err(SearchTimeout));
        assert_eq!(ctx.search(&state, SearchMethod::AlphaBeta, 1), Err(SearchTimeout));
        assert_eq!(ctx.nodes(), 0);
    }

    #[test]
    fn test_timeout_mid_search_unwinds() {
        let state = midgame();
        let eval = custom_score::<IsolationBoard>;
        let probe = CountdownProbe::new(3);
        let mut ctx = SearchContext::new(&eval, &probe, 10.0);

        assert_eq!(ctx.minimax(&state, 4, true), Err(SearchTimeout));
        assert_eq!(ctx.nodes(), 3);
    }

    #[test]
    fn test_threshold_is_strict_lower_bound() {
        let state = midgame();
        let eval = custom_score::<IsolationBoard>;
        let probe = || 10.0;
        let mut ctx = SearchContext::new(&eval, &probe, 10.0);
        assert!(ctx.minimax(&state, 1, true).is_ok());
    }
}
