use serde::Serialize;

use crate::{Board, Position};

/// A constraint violated by a candidate placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {
    Row,
    Column,
    Region,
}

/// Outcome of a placement check, shaped for the wire:
/// `{"valid":true}` or `{"valid":false,"conflict":["row",...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflict: Vec<Conflict>,
}

impl PlacementReport {
    pub(crate) fn new(conflict: Vec<Conflict>) -> Self {
        Self {
            valid: conflict.is_empty(),
            conflict,
        }
    }
}

/// Every constraint `value` would violate at `pos` on the current
/// board, in fixed row, column, region order.
///
/// All three scans run unconditionally so the caller sees the complete
/// set of conflicts, not just the first. The scans look for `value`
/// anywhere in the shared unit — including the target cell itself if
/// it already holds `value`; whatever *different* value the target
/// cell may hold is irrelevant. Deciding whether to apply the
/// placement is the caller's business.
pub fn conflicts(board: &Board, pos: Position, value: u8) -> Vec<Conflict> {
    let mut found = Vec::new();
    if row_has(board, pos.row, value) {
        found.push(Conflict::Row);
    }
    if column_has(board, pos.col, value) {
        found.push(Conflict::Column);
    }
    if region_has(board, pos, value) {
        found.push(Conflict::Region);
    }
    found
}

fn row_has(board: &Board, row: usize, value: u8) -> bool {
    (0..9).any(|col| board.get(Position { row, col }) == Some(value))
}

fn column_has(board: &Board, col: usize, value: u8) -> bool {
    (0..9).any(|row| board.get(Position { row, col }) == Some(value))
}

fn region_has(board: &Board, pos: Position, value: u8) -> bool {
    // Region origin snaps to the enclosing 3×3 block.
    let first_row = pos.row / 3 * 3;
    let first_col = pos.col / 3 * 3;
    (first_row..first_row + 3).any(|row| {
        (first_col..first_col + 3).any(|col| board.get(Position { row, col }) == Some(value))
    })
}
