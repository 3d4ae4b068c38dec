use crate::{placement, Board, Error, PlacementReport, Position};

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve a puzzle string to completion.
    ///
    /// Format errors are reported before any search starts. The search
    /// itself is plain depth-first backtracking over a private working
    /// copy: find the first empty cell, try candidates 1 through 9 in
    /// ascending order, recurse, undo on failure. The first solution
    /// found is returned; uniqueness is not verified.
    pub fn solve(&self, puzzle: &str) -> Result<String, Error> {
        let mut working = Board::parse(puzzle)?;
        if solve_recursive(&mut working, 0) {
            Ok(working.to_string())
        } else {
            Err(Error::Unsolvable)
        }
    }

    /// Check whether `value` may legally be placed at `coordinate`.
    ///
    /// Validation is ordered and short-circuiting: puzzle format,
    /// then coordinate shape, then value shape. Only well-formed input
    /// reaches the board.
    pub fn check_placement(
        &self,
        puzzle: &str,
        coordinate: &str,
        value: &str,
    ) -> Result<PlacementReport, Error> {
        let board = Board::parse(puzzle)?;
        let pos = Position::from_coordinate(coordinate)?;
        let value = parse_value(value)?;
        Ok(PlacementReport::new(placement::conflicts(
            &board, pos, value,
        )))
    }
}

/// Fill every empty cell at or after `start`, backtracking on dead ends.
///
/// Cells before `start` are already filled, so restarting the scan
/// there is equivalent to rescanning from 0. Returns true once no
/// empty cell remains.
fn solve_recursive(board: &mut Board, start: usize) -> bool {
    let Some(index) = board.first_empty_from(start) else {
        return true;
    };
    let pos = Position::from_index(index);
    for candidate in 1..=9 {
        if placement::conflicts(board, pos, candidate).is_empty() {
            board.set(pos, Some(candidate));
            if solve_recursive(board, index) {
                return true;
            }
            board.set(pos, None);
        }
    }
    false
}

/// A placement value is exactly one digit `1`-`9`. The empty marker
/// `.` is never a valid candidate.
fn parse_value(value: &str) -> Result<u8, Error> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(digit @ '1'..='9'), None) => Ok(digit as u8 - b'0'),
        _ => Err(Error::InvalidValue),
    }
}
