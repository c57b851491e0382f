//! Core Connect Four game logic: validated coordinates, player and move value
//! types, and the immutable board state machine.

mod board;
mod coords;
mod moves;
mod player;
mod state;

pub use board::{Board, ColumnCells};
pub use coords::{Column, Row, COLUMNS, ROWS};
pub use moves::Move;
pub use player::Player;
pub use state::GameState;
