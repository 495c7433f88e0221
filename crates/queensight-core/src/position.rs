//! Board coordinates.

use std::fmt::{self, Display};

/// A `(row, col)` coordinate on the board.
///
/// Rows grow downward and columns grow rightward, both starting at 0. The
/// search fills columns left to right, so `col` is the recursion depth of
/// the cell's placement.
///
/// # Examples
///
/// ```
/// use queensight_core::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.row, 1);
/// assert_eq!(pos.col, 3);
/// assert_eq!(pos.to_string(), "(1, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
