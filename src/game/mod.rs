//! Core Connect Four game logic: board representation, player types, and the
//! mutable game state used by both the human and the search.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
