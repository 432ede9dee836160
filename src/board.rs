//! Stone colors and the square grid of cells.
//!
//! The grid is pure storage: it knows its size and which stone sits where, and
//! which points touch which. Rules live in [`crate::resolver`].

use std::fmt;

use crate::constants::{BOARD_LETTERS, EMPTY, MAX_SIZE, MIN_SIZE, STONE_BLACK, STONE_WHITE};
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// The opposing color.
    pub fn other(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => STONE_BLACK,
            Stone::White => STONE_WHITE,
        }
    }

    /// Parse a GTP-style color: `b`, `black`, `w`, `white` (any case).
    pub fn parse(text: &str) -> Option<Stone> {
        match text.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Stone::Black),
            "w" | "white" => Some(Stone::White),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Stone::Black => 0,
            Stone::White => 1,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => f.write_str("black"),
            Stone::White => f.write_str("white"),
        }
    }
}

/// A square board of `size * size` cells.
///
/// Cells are stored row-major with row 1 (the bottom edge) first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Errors
    /// `InvalidBoardSize` unless `2 <= size <= 19`.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Error::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, pt: Coordinate) -> Result<usize> {
        let pt = pt.check(self.size)?;
        Ok((pt.row() - 1) * self.size + (pt.col() - 1))
    }

    pub fn get(&self, pt: Coordinate) -> Result<Option<Stone>> {
        let i = self.idx(pt)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, pt: Coordinate, stone: Option<Stone>) -> Result<()> {
        let i = self.idx(pt)?;
        self.cells[i] = stone;
        Ok(())
    }

    /// Stone at a point already known to be on the board.
    pub(crate) fn at(&self, pt: Coordinate) -> Option<Stone> {
        self.cells[(pt.row() - 1) * self.size + (pt.col() - 1)]
    }

    pub fn contains(&self, pt: Coordinate) -> bool {
        pt.fits(self.size)
    }

    /// Orthogonal neighbors in the order left, right, up, down, skipping
    /// any that fall off the board.
    pub fn neighbors(&self, pt: Coordinate) -> impl Iterator<Item = Coordinate> + use<> {
        let s = self.size;
        let (col, row) = (pt.col(), pt.row());
        let mut v = Vec::with_capacity(4);
        if col > 1 {
            v.push((col - 1, row));
        }
        if col < s {
            v.push((col + 1, row));
        }
        if row < s {
            v.push((col, row + 1));
        }
        if row > 1 {
            v.push((col, row - 1));
        }
        v.into_iter().map(|(c, r)| Coordinate::new_unchecked(c, r))
    }

    /// Every point on the board, row-major from row 1 (bottom), column 1
    /// (left). Each call starts a fresh iterator.
    pub fn points(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let s = self.size;
        (1..=s).flat_map(move |row| (1..=s).map(move |col| Coordinate::new_unchecked(col, row)))
    }

    /// `(point, cell)` pairs in [`Grid::points`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Option<Stone>)> + '_ {
        self.points().zip(self.cells.iter().copied())
    }

    /// Number of stones of the given color on the board.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|c| **c == Some(stone)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Remove every stone.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Column label line, with the same cell spacing as the rows.
    fn letters(&self) -> String {
        let labels: Vec<String> = BOARD_LETTERS.chars().take(self.size).map(String::from).collect();
        format!("   {}", labels.join(" "))
    }
}

/// Text diagram: letters above and below, row numbers on both sides, the top
/// row (`size`) printed first. Every cell is one character followed by a
/// space separator so stones sit directly under their column letter:
///
/// ```text
///    A B C
/// 3  . . .  3
/// 2  . X .  2
/// 1  O . .  1
///    A B C
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.letters();
        writeln!(f, "{letters}")?;
        for row in (1..=self.size).rev() {
            write!(f, "{row:<3}")?;
            let cells: Vec<String> = (1..=self.size)
                .map(|col| match self.at(Coordinate::new_unchecked(col, row)) {
                    Some(stone) => stone.symbol().to_string(),
                    None => EMPTY.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
            writeln!(f, "{row:>3}")?;
        }
        writeln!(f, "{letters}")
    }
}
