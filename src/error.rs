use crate::game::{Column, Player};

/// Errors that can occur when constructing a coordinate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("column {0} is outside the valid range 1..=7")]
    InvalidColumn(u8),

    #[error("row {0} is outside the valid range 1..=6")]
    InvalidRow(u8),
}

/// Errors that can occur when applying a move to a board.
///
/// Both conditions are detected before any grid change; the receiving board
/// is untouched on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("it is {expected}'s turn, not {got}'s")]
    WrongPlayer { expected: Player, got: Player },

    #[error("column {0} is full")]
    ColumnFull(Column),
}

/// Errors that can occur when restoring a persisted board.
///
/// Detected while deserializing, so an invariant-violating grid never
/// becomes a [`Board`](crate::game::Board) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("column {0} has a piece above an empty cell")]
    FloatingPiece(Column),

    #[error("{red} Red and {yellow} Yellow pieces do not fit {next} playing next")]
    InconsistentTurn { red: u8, yellow: u8, next: Player },
}
