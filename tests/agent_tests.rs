//! End-to-end tests of the move-selection facade.

use std::cell::Cell;

use isolation_agent::board::{GameState, IsolationBoard, Move, Player};
use isolation_agent::evaluation::ImprovedScore;
use isolation_agent::search::{SearchConfig, SearchMethod};
use isolation_agent::timer::{CountdownProbe, Deadline, TimeProbe};
use isolation_agent::IsolationAgent;

#[test]
fn empty_legal_moves_returns_sentinel_without_polling() {
    let agent = IsolationAgent::default();
    let board = IsolationBoard::new(7, 7).unwrap();
    let polls = Cell::new(0);
    let probe = || {
        polls.set(polls.get() + 1);
        1_000.0
    };
    assert_eq!(agent.select_move(&board, &[], &probe), Move::NONE);
    assert_eq!(polls.get(), 0);
}

#[test]
fn self_play_game_moves_legally_or_resigns() {
    let minimax = IsolationAgent::with_default_score(SearchConfig::default()).unwrap();
    let alphabeta = IsolationAgent::new(
        SearchConfig::default().with_method(SearchMethod::AlphaBeta),
        ImprovedScore,
    )
    .unwrap();

    let mut board = IsolationBoard::new(5, 5).unwrap();
    loop {
        let legal = board.legal_moves();
        if legal.is_empty() {
            let loser = board.active_player();
            assert!(board.is_loser(loser));
            assert!(board.is_winner(loser.opponent()));
            break;
        }
        let probe = CountdownProbe::new(2_000);
        let mv = match board.active_player() {
            Player::One => minimax.select_move(&board, &legal, &probe),
            Player::Two => alphabeta.select_move(&board, &legal, &probe),
        };
        // A side that has proven every move lost resigns with the sentinel
        if mv.is_none() {
            break;
        }
        assert!(legal.contains(&mv), "{mv} not legal on\n{board}");
        board.apply_move(mv).unwrap();
    }
    assert!(board.move_count() >= 2);
}

#[test]
fn returns_before_deadline() {
    let config = SearchConfig::default()
        .with_method(SearchMethod::AlphaBeta)
        .with_timeout_ms(20.0);
    let agent = IsolationAgent::with_default_score(config).unwrap();

    let mut board = IsolationBoard::new(7, 7).unwrap();
    board.apply_move(Move(3, 3)).unwrap();
    board.apply_move(Move(0, 0)).unwrap();

    let deadline = Deadline::from_millis(100);
    let mv = agent.select_move(&board, &board.legal_moves(), &deadline);
    assert!(deadline.time_left() > 0.0);
    assert!(board.legal_moves().contains(&mv));
}

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let config = SearchConfig::default()
        .with_method(SearchMethod::AlphaBeta)
        .with_depth(5)
        .with_timeout_ms(25.0);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"alphabeta\""));
    let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    // Missing fields fall back to defaults
    let partial: SearchConfig = serde_json::from_str(r#"{"iterative": false}"#).unwrap();
    assert_eq!(partial, SearchConfig::default().with_iterative(false));
}
