use serde::{Deserialize, Serialize};

use super::{Column, Player};

/// A player's declared intent to drop a piece into a column.
///
/// Carries no row: the landing row is derived by the board (gravity places
/// the piece at the lowest unoccupied row of the column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    column: Column,
}

impl Move {
    pub fn new(player: Player, column: Column) -> Self {
        Move { player, column }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn column(&self) -> Column {
        self.column
    }
}
