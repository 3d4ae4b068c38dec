use thiserror::Error;

/// Every failure the engine can report.
///
/// The display strings are part of the observable API contract;
/// callers and the functional test suite match on the exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The puzzle string contains a character outside `1`-`9` and `.`.
    #[error("Invalid characters in puzzle")]
    InvalidCharacters,
    /// The puzzle string is not exactly 81 characters.
    #[error("Expected puzzle to be 81 characters long")]
    InvalidLength,
    /// The coordinate is not a row letter `A`-`I` followed by a column
    /// digit `1`-`9`.
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    /// The value is not a single digit `1`-`9`.
    #[error("Invalid value")]
    InvalidValue,
    /// The backtracking search exhausted every candidate.
    #[error("Puzzle cannot be solved")]
    Unsolvable,
}
