use std::fmt;

use crate::Error;

/// Number of cells on a standard board.
pub(crate) const CELL_COUNT: usize = 81;

/// A cell position on the 9×9 grid, both axes 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Parse an external coordinate such as `"A5"`: a case-sensitive
    /// row letter `A`-`I` followed by a 1-indexed column digit `1`-`9`.
    /// Anything else (wrong letter, wrong digit, wrong length) is
    /// rejected before it can reach a grid.
    pub fn from_coordinate(coordinate: &str) -> Result<Self, Error> {
        let mut chars = coordinate.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(row @ 'A'..='I'), Some(col @ '1'..='9'), None) => Ok(Self {
                row: row as usize - 'A' as usize,
                col: col as usize - '1' as usize,
            }),
            _ => Err(Error::InvalidCoordinate),
        }
    }

    /// Row-major cell index, `row * 9 + col`. Both axes must be in
    /// `[0, 8]`; positions built from `from_coordinate` or
    /// `from_index` always are.
    pub fn index(&self) -> usize {
        debug_assert!(self.row < 9 && self.col < 9, "position off the board");
        self.row * 9 + self.col
    }

    /// Inverse of [`Position::index`]. `index` must be below 81.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT, "cell index off the board");
        Self {
            row: index / 9,
            col: index % 9,
        }
    }
}

/// A 9×9 board: 81 cells in row-major order, `None` for empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<u8>; CELL_COUNT],
}

impl Board {
    /// Parse a flat 81-character puzzle string.
    ///
    /// Character validity is checked before length, matching the
    /// published validation order: a short string of digits reports
    /// [`Error::InvalidLength`], but any stray character anywhere
    /// reports [`Error::InvalidCharacters`] regardless of length.
    /// There is no partially-parsed state.
    pub fn parse(puzzle: &str) -> Result<Self, Error> {
        if !puzzle.chars().all(|c| matches!(c, '1'..='9' | '.')) {
            return Err(Error::InvalidCharacters);
        }
        if puzzle.chars().count() != CELL_COUNT {
            return Err(Error::InvalidLength);
        }

        let mut cells = [None; CELL_COUNT];
        for (cell, c) in cells.iter_mut().zip(puzzle.chars()) {
            if c != '.' {
                *cell = Some(c as u8 - b'0');
            }
        }
        Ok(Self { cells })
    }

    /// Value at a position, `None` when empty.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.index()]
    }

    /// Set or clear a cell. No legality check; the solver relies on
    /// this to place and un-place candidates.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        self.cells[pos.index()] = value;
    }

    /// Index of the first empty cell at or after `start`, scanning in
    /// row-major order.
    pub(crate) fn first_empty_from(&self, start: usize) -> Option<usize> {
        self.cells[start..]
            .iter()
            .position(Option::is_none)
            .map(|offset| start + offset)
    }
}

/// Inverse of [`Board::parse`]: the flat 81-character form.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(v) => write!(f, "{v}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
