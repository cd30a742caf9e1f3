//! Core board types.
//!
//! - `Player` - the two sides
//! - `Move` - a destination cell, with the `(-1, -1)` sentinel

mod moves;
mod player;

pub use moves::Move;
pub use player::Player;
