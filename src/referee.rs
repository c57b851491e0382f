//! Win and draw detection, layered on the board's read-only query interface.
//!
//! The board's own [`GameState`](crate::game::GameState) only tracks whose
//! turn is next; drivers call [`outcome`] after each transition to learn
//! whether the game has ended.

use serde::{Deserialize, Serialize};

use crate::game::{Board, Column, Player, Row};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A winning run is four in a row in any of these directions: right, up,
/// up-right, up-left. Scanning every cell as a run start covers the mirrored
/// directions too.
const DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// The outcome of the position, or `None` if the game is still in progress.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(player) = winner(board) {
        return Some(GameOutcome::Winner(player));
    }
    if Column::all().all(|column| is_column_full(board, column)) {
        return Some(GameOutcome::Draw);
    }
    None
}

/// The player holding a four-in-a-row, if any.
pub fn winner(board: &Board) -> Option<Player> {
    for column in Column::all() {
        for row in Row::all() {
            let Some(player) = board.cell(column, row) else {
                continue;
            };
            for (dc, dr) in DIRECTIONS {
                if completes_run(board, player, column, row, dc, dr) {
                    return Some(player);
                }
            }
        }
    }
    None
}

/// Whether a column has no empty cell left.
pub fn is_column_full(board: &Board, column: Column) -> bool {
    board
        .column_contents(column)
        .iter()
        .all(|cell| cell.is_some())
}

/// The columns a piece can still be dropped into, left to right.
pub fn legal_columns(board: &Board) -> Vec<Column> {
    Column::all()
        .filter(|&column| !is_column_full(board, column))
        .collect()
}

fn completes_run(
    board: &Board,
    player: Player,
    column: Column,
    row: Row,
    dc: i8,
    dr: i8,
) -> bool {
    (1..4).all(|step| {
        cell_at(
            board,
            column.get() as i8 + dc * step,
            row.get() as i8 + dr * step,
        ) == Some(player)
    })
}

/// Cell lookup tolerating off-grid coordinates (treated as empty).
fn cell_at(board: &Board, column: i8, row: i8) -> Option<Player> {
    let column = u8::try_from(column).ok().and_then(|n| Column::new(n).ok())?;
    let row = u8::try_from(row).ok().and_then(|n| Row::new(n).ok())?;
    board.cell(column, row)
}
