//! Validated grid coordinates. Columns are numbered 1–7 left to right, rows
//! 1–6 bottom to top. Construction rejects out-of-range values, so board
//! logic never sees an invalid coordinate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// Number of columns in the grid.
pub const COLUMNS: u8 = 7;
/// Number of rows in the grid.
pub const ROWS: u8 = 6;

/// A column identifier in the inclusive range 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Column(u8);

impl Column {
    /// Construct a column, rejecting numbers outside 1..=7.
    pub fn new(number: u8) -> Result<Self, CoordinateError> {
        if (1..=COLUMNS).contains(&number) {
            Ok(Column(number))
        } else {
            Err(CoordinateError::InvalidColumn(number))
        }
    }

    /// The 1-based column number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterate every column, left to right.
    pub fn all() -> impl DoubleEndedIterator<Item = Column> {
        (1..=COLUMNS).map(Column)
    }

    /// 0-based array index for grid storage.
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Column {
    type Error = CoordinateError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Column::new(number)
    }
}

impl From<Column> for u8 {
    fn from(column: Column) -> u8 {
        column.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row identifier in the inclusive range 1..=6, counted bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Row(u8);

impl Row {
    /// Construct a row, rejecting numbers outside 1..=6.
    pub fn new(number: u8) -> Result<Self, CoordinateError> {
        if (1..=ROWS).contains(&number) {
            Ok(Row(number))
        } else {
            Err(CoordinateError::InvalidRow(number))
        }
    }

    /// The 1-based row number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterate every row, bottom to top.
    pub fn all() -> impl DoubleEndedIterator<Item = Row> {
        (1..=ROWS).map(Row)
    }

    /// 0-based array index for grid storage.
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Row {
    type Error = CoordinateError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Row::new(number)
    }
}

impl From<Row> for u8 {
    fn from(row: Row) -> u8 {
        row.0
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
