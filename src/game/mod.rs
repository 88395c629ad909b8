//! Core Reversi game logic: board representation, flip propagation, player
//! types, and the turn-lifecycle state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Coord, BOARD_SIZE};
pub use player::Player;
pub use state::{GameOutcome, GameState};
