//! Placement safety check for the left-to-right column search.

use crate::{Board, Position};

/// Returns true if a queen at `(row, col)` would be unattacked by every
/// queen already placed in columns left of `col`.
///
/// Exactly three directions are scanned: the row leftward, the upper-left
/// diagonal, and the lower-left diagonal. Columns at or right of `col` are
/// never inspected, because the search fills columns strictly left to
/// right and they cannot hold queens yet. The asymmetry is intentional; do not "complete"
/// it into a symmetric check.
///
/// O(N) per call, no side effects.
///
/// # Examples
///
/// ```
/// use queensight_core::{Board, BoardSize, CellState, Position, is_safe};
///
/// let mut board = Board::new(BoardSize::new(4).unwrap());
/// board.set(Position::new(0, 0), CellState::Queen);
///
/// assert!(!is_safe(&board, 0, 2)); // same row
/// assert!(!is_safe(&board, 2, 2)); // upper-left diagonal
/// assert!(is_safe(&board, 3, 2));
/// ```
#[must_use]
pub fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    // Same row, leftward.
    for c in 0..col {
        if board.cell(Position::new(row, c)).is_queen() {
            return false;
        }
    }

    // Upper-left diagonal.
    for (r, c) in (0..row).rev().zip((0..col).rev()) {
        if board.cell(Position::new(r, c)).is_queen() {
            return false;
        }
    }

    // Lower-left diagonal.
    for (r, c) in (row + 1..board.size()).zip((0..col).rev()) {
        if board.cell(Position::new(r, c)).is_queen() {
            return false;
        }
    }

    true
}
