//! Core Sudoku engine.
//!
//! Validates and solves 9×9 puzzles supplied as flat 81-character
//! strings (`1`-`9` for givens, `.` for empty cells). Two operations
//! are exposed through [`Solver`]: checking whether a single placement
//! is legal, and solving a puzzle to completion by backtracking.
//!
//! The engine is pure and synchronous: every call parses its own board,
//! mutates only a private working copy, and returns either a success
//! payload or a fixed-message [`Error`]. Nothing is shared between
//! calls, so concurrent use needs no locking.

mod board;
mod error;
mod placement;
mod solver;

pub use board::{Board, Position};
pub use error::Error;
pub use placement::{conflicts, Conflict, PlacementReport};
pub use solver::Solver;
