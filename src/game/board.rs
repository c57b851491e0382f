use std::fmt;

use serde::{Deserialize, Serialize};

use super::coords::{COLUMNS, ROWS};
use super::{Column, GameState, Move, Player, Row};
use crate::error::{IntegrityError, MoveError};

/// Cell contents of one column, indexed by row bottom (1) to top (6).
pub type ColumnCells = [Option<Player>; ROWS as usize];

/// An immutable Connect Four position: the 7×6 grid plus whose turn is next.
///
/// A board is created once at game start by [`Board::initial`] and thereafter
/// only by [`Board::apply_move`], which returns a new value and leaves the
/// receiver unchanged. Boards are `Copy`, so every value owns its own grid
/// snapshot; retaining old references gives free history and branching.
///
/// Gravity invariant: in every column the occupied cells form a contiguous
/// run starting at row 1, so a cell above an empty cell is never occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    columns: [ColumnCells; COLUMNS as usize],
    state: GameState,
}

/// Serialized shape of [`Board`]. Restoring funnels through
/// [`TryFrom`], so a persisted grid that breaks the gravity or turn
/// alternation invariants is rejected instead of becoming a board.
#[derive(Deserialize)]
#[serde(rename = "Board")]
struct RawBoard {
    columns: [ColumnCells; COLUMNS as usize],
    state: GameState,
}

impl TryFrom<RawBoard> for Board {
    type Error = IntegrityError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut red = 0u8;
        let mut yellow = 0u8;
        for column in Column::all() {
            let cells = raw.columns[column.index()];
            let filled = cells.iter().take_while(|cell| cell.is_some()).count();
            if cells[filled..].iter().any(Option::is_some) {
                return Err(IntegrityError::FloatingPiece(column));
            }
            for player in cells.iter().flatten() {
                match player {
                    Player::Red => red += 1,
                    Player::Yellow => yellow += 1,
                }
            }
        }

        // Strict alternation: the counts differ by at most one, and whoever
        // is behind (if anyone) is the one to move next. Equal counts fit
        // either first player.
        let next = raw.state.player();
        let alternating = red == yellow
            || (red == yellow + 1 && next == Player::Yellow)
            || (yellow == red + 1 && next == Player::Red);
        if !alternating {
            return Err(IntegrityError::InconsistentTurn { red, yellow, next });
        }

        Ok(Board {
            columns: raw.columns,
            state: raw.state,
        })
    }
}

impl Board {
    /// Create an empty board where `first` moves next. The canonical game
    /// starts with Red; [`Board::default`] does exactly that.
    pub fn initial(first: Player) -> Self {
        Board {
            columns: [[None; ROWS as usize]; COLUMNS as usize],
            state: GameState::turn_of(first),
        }
    }

    /// Whose turn is next. Pure query.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player implied by the current state. Pure query.
    pub fn next_player(&self) -> Player {
        self.state.player()
    }

    /// The occupant of a cell, or `None` if it is empty.
    pub fn cell(&self, column: Column, row: Row) -> Option<Player> {
        self.columns[column.index()][row.index()]
    }

    /// The six cells of a column, ordered row 1 (bottom) to row 6 (top).
    pub fn column_contents(&self, column: Column) -> ColumnCells {
        self.columns[column.index()]
    }

    /// Apply a move and return the resulting board, leaving `self` unchanged.
    ///
    /// Fails with [`MoveError::WrongPlayer`] if the move's player is not
    /// [`next_player`](Board::next_player), or with [`MoveError::ColumnFull`]
    /// if the target column has no empty cell. Both checks run before any
    /// grid change, so on failure the receiver is guaranteed untouched.
    pub fn apply_move(&self, mv: &Move) -> Result<Board, MoveError> {
        let expected = self.next_player();
        if mv.player() != expected {
            return Err(MoveError::WrongPlayer {
                expected,
                got: mv.player(),
            });
        }

        let column = mv.column();
        // Gravity: the piece lands in the lowest empty row of the column.
        let landing = self.columns[column.index()]
            .iter()
            .position(Option::is_none)
            .ok_or(MoveError::ColumnFull(column))?;

        let mut columns = self.columns;
        columns[column.index()][landing] = Some(mv.player());

        Ok(Board {
            columns,
            state: self.state.toggled(),
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial(Player::Red)
    }
}

impl fmt::Display for Board {
    /// Plain-text grid, top row first: `.` for empty, `R`/`Y` for pieces,
    /// with a column-number footer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Row::all().rev() {
            for column in Column::all() {
                let symbol = match self.cell(column, row) {
                    Some(Player::Red) => 'R',
                    Some(Player::Yellow) => 'Y',
                    None => '.',
                };
                if column.get() > 1 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(n: u8) -> Column {
        Column::new(n).unwrap()
    }

    fn row(n: u8) -> Row {
        Row::new(n).unwrap()
    }

    fn red(n: u8) -> Move {
        Move::new(Player::Red, col(n))
    }

    fn yellow(n: u8) -> Move {
        Move::new(Player::Yellow, col(n))
    }

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::initial(Player::Red);
        for column in Column::all() {
            for row in Row::all() {
                assert_eq!(board.cell(column, row), None);
            }
        }
        assert_eq!(board.state(), GameState::RedPlaysNext);
        assert_eq!(board.next_player(), Player::Red);
    }

    #[test]
    fn test_default_is_red_first() {
        assert_eq!(Board::default(), Board::initial(Player::Red));
    }

    #[test]
    fn test_column_contents_has_six_entries() {
        let board = Board::default();
        for column in Column::all() {
            assert_eq!(board.column_contents(column), [None; 6]);
        }
    }

    #[test]
    fn test_apply_move_places_at_bottom() {
        let board = Board::default();
        let next = board.apply_move(&red(4)).unwrap();

        assert_eq!(next.cell(col(4), row(1)), Some(Player::Red));
        assert_eq!(next.cell(col(3), row(1)), None);
        assert_eq!(next.next_player(), Player::Yellow);
        // The receiver is unchanged.
        assert_eq!(board.cell(col(4), row(1)), None);
        assert_eq!(board.next_player(), Player::Red);
    }

    #[test]
    fn test_two_moves_in_same_column_stack() {
        let b0 = Board::default();
        let b1 = b0.apply_move(&red(4)).unwrap();
        let b2 = b1.apply_move(&yellow(4)).unwrap();

        assert_eq!(b2.cell(col(4), row(1)), Some(Player::Red));
        assert_eq!(b2.cell(col(4), row(2)), Some(Player::Yellow));
        assert_eq!(b2.cell(col(3), row(1)), None);
        // Intermediate board still queries its prior state.
        assert_eq!(b1.cell(col(4), row(2)), None);
    }

    #[test]
    fn test_two_moves_in_different_columns() {
        let b0 = Board::default();
        let b1 = b0.apply_move(&red(4)).unwrap();
        let b2 = b1.apply_move(&yellow(3)).unwrap();

        assert_eq!(b2.cell(col(4), row(1)), Some(Player::Red));
        assert_eq!(b2.cell(col(4), row(2)), None);
        assert_eq!(b2.cell(col(3), row(1)), Some(Player::Yellow));
    }

    #[test]
    fn test_wrong_player_is_rejected() {
        let board = Board::default();
        let err = board.apply_move(&yellow(4)).unwrap_err();
        assert_eq!(
            err,
            MoveError::WrongPlayer {
                expected: Player::Red,
                got: Player::Yellow,
            }
        );
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_full_column_is_rejected() {
        let mut board = Board::default();
        for _ in 0..3 {
            board = board.apply_move(&red(3)).unwrap();
            board = board.apply_move(&yellow(3)).unwrap();
        }

        let err = board.apply_move(&red(3)).unwrap_err();
        assert_eq!(err, MoveError::ColumnFull(col(3)));
        // Column 3 is full bottom to top, alternating from Red.
        assert_eq!(
            board.column_contents(col(3)),
            [
                Some(Player::Red),
                Some(Player::Yellow),
                Some(Player::Red),
                Some(Player::Yellow),
                Some(Player::Red),
                Some(Player::Yellow),
            ]
        );
    }

    #[test]
    fn test_failed_move_leaves_state_unchanged() {
        let mut board = Board::default();
        for _ in 0..3 {
            board = board.apply_move(&red(1)).unwrap();
            board = board.apply_move(&yellow(1)).unwrap();
        }
        let before = board;

        assert!(board.apply_move(&red(1)).is_err());
        assert_eq!(board, before);
        assert_eq!(board.next_player(), Player::Red);
    }

    #[test]
    fn test_turn_alternation() {
        let mut board = Board::default();
        for turn in 0u8..10 {
            let mover = board.next_player();
            assert_eq!(
                mover,
                if turn % 2 == 0 {
                    Player::Red
                } else {
                    Player::Yellow
                }
            );
            board = board
                .apply_move(&Move::new(mover, col(turn % 7 + 1)))
                .unwrap();
            assert_eq!(board.next_player(), mover.other());
        }
    }

    #[test]
    fn test_queries_are_idempotent() {
        let board = Board::default().apply_move(&red(5)).unwrap();
        assert_eq!(board.state(), board.state());
        assert_eq!(board.next_player(), board.next_player());
        assert_eq!(board.cell(col(5), row(1)), board.cell(col(5), row(1)));
        assert_eq!(
            board.column_contents(col(5)),
            board.column_contents(col(5))
        );
    }

    #[test]
    fn test_display_renders_grid() {
        let board = Board::default()
            .apply_move(&red(1))
            .unwrap()
            .apply_move(&yellow(1))
            .unwrap();

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], ". . . . . . .");
        assert_eq!(lines[4], "Y . . . . . .");
        assert_eq!(lines[5], "R . . . . . .");
        assert_eq!(lines[6], "1 2 3 4 5 6 7");
    }
}
