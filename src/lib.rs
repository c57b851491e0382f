//! # Connect Four Engine
//!
//! An immutable rules engine for Connect Four: a 7×6 grid into which two
//! players alternately drop pieces that fall to the lowest free slot of a
//! chosen column. Applying a move never mutates the receiving board — it
//! produces a new [`game::Board`] value, so callers can keep history, branch,
//! or undo simply by retaining prior references.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: validated coordinates, players, moves, and
//!   the immutable board state machine
//! - [`referee`] — Win/draw detection layered on the board's query interface
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_four::{Board, Column, Move, Player, Row};
//!
//! let board = Board::default();
//! let mv = Move::new(Player::Red, Column::new(4)?);
//! let next = board.apply_move(&mv)?;
//!
//! assert_eq!(next.cell(Column::new(4)?, Row::new(1)?), Some(Player::Red));
//! assert_eq!(next.next_player(), Player::Yellow);
//! // The original board is untouched.
//! assert_eq!(board.cell(Column::new(4)?, Row::new(1)?), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod game;
pub mod referee;

pub use error::{CoordinateError, IntegrityError, MoveError};
pub use game::{Board, Column, GameState, Move, Player, Row};
pub use referee::GameOutcome;
