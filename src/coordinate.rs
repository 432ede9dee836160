//! Board coordinates and their textual notations.
//!
//! A [`Coordinate`] is a 1-indexed `(column, row)` pair. Column 1 is the left
//! edge and row 1 is the **bottom** edge, so `A1` is the bottom-left corner and
//! rows grow upward. Two notations are understood:
//!
//! - letter-number, e.g. `"D4"` or `"q16"`: the column letter comes from
//!   [`BOARD_LETTERS`] (no 'I'), the row is a decimal number;
//! - dash form, e.g. `"4-4"`: raw `col-row` integers on the same axes.
//!
//! Formatting always produces upper-case letter-number notation.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_LETTERS, MAX_SIZE, PASS};
use crate::error::{Error, Result};

/// A point on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    /// Create a coordinate, checking `1 <= col, row <= size`.
    pub fn new(col: usize, row: usize, size: usize) -> Result<Self> {
        if !(1..=size).contains(&col) || !(1..=size).contains(&row) || size > MAX_SIZE {
            return Err(Error::OutOfRange { col, row, size });
        }
        Ok(Self::new_unchecked(col, row))
    }

    /// Caller guarantees both values lie in `1..=MAX_SIZE`.
    pub(crate) fn new_unchecked(col: usize, row: usize) -> Self {
        Self {
            col: col as u8,
            row: row as u8,
        }
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Whether this coordinate lies on a board of the given size.
    pub fn fits(self, size: usize) -> bool {
        self.col() <= size && self.row() <= size
    }

    /// Fail with `OutOfRange` unless the coordinate lies on a `size` board.
    pub fn check(self, size: usize) -> Result<Self> {
        Self::new(self.col(), self.row(), size)
    }

    /// Parse either notation, bounded by the largest board.
    ///
    /// # Errors
    /// - `InvalidFormat` for empty input, a bad column letter, a non-numeric
    ///   row or a length no board size allows
    /// - `OutOfRange` when the numbers fall outside `1..=19`
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat(text.to_string());

        if text.is_empty() || !text.is_ascii() {
            return Err(invalid());
        }

        let (col, row) = if let Some((col, row)) = text.split_once('-') {
            if !(3..=5).contains(&text.len()) {
                return Err(invalid());
            }
            (parse_number(col).ok_or_else(invalid)?, parse_number(row).ok_or_else(invalid)?)
        } else {
            if !(2..=3).contains(&text.len()) {
                return Err(invalid());
            }
            let letter = text.as_bytes()[0].to_ascii_uppercase() as char;
            let col = column_index(letter).ok_or_else(invalid)?;
            (col, parse_number(&text[1..]).ok_or_else(invalid)?)
        };

        Self::new(col, row, MAX_SIZE)
    }

    /// Parse and check against a board of the given size.
    pub fn parse_on(text: &str, size: usize) -> Result<Self> {
        Self::parse(text)?.check(size)
    }

    /// Dash notation, e.g. `"4-4"`.
    pub fn to_dash(self) -> String {
        format!("{}-{}", self.col, self.row)
    }
}

/// 1-based column index for a letter of [`BOARD_LETTERS`].
pub fn column_index(letter: char) -> Option<usize> {
    BOARD_LETTERS.find(letter).map(|i| i + 1)
}

/// Letter for a 1-based column index.
pub fn column_letter(col: usize) -> char {
    BOARD_LETTERS.as_bytes()[col - 1] as char
}

/// Digits only; `str::parse` alone would accept a leading '+'.
fn parse_number(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col()), self.row)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Where a move goes: a point, or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Vertex {
    Point(Coordinate),
    Pass,
}

impl Vertex {
    /// Parse `"pass"` (any case) or a coordinate.
    pub fn parse(text: &str) -> Result<Self> {
        if text.eq_ignore_ascii_case(PASS) {
            return Ok(Vertex::Pass);
        }
        Coordinate::parse(text).map(Vertex::Point)
    }

    pub fn point(self) -> Option<Coordinate> {
        match self {
            Vertex::Point(pt) => Some(pt),
            Vertex::Pass => None,
        }
    }

    pub fn is_pass(self) -> bool {
        self == Vertex::Pass
    }
}

impl From<Coordinate> for Vertex {
    fn from(pt: Coordinate) -> Self {
        Vertex::Point(pt)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::Point(pt) => write!(f, "{pt}"),
            Vertex::Pass => f.write_str(PASS),
        }
    }
}

impl FromStr for Vertex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
