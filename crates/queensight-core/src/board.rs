//! The N×N board grid.

use crate::{BoardSize, CellState, Position};

/// An N×N grid of [`CellState`]s.
///
/// A fresh board is allocated for every search run and owned exclusively by
/// it; consumers only ever see cloned snapshots. While the board represents
/// a valid partial solution, at most one queen occupies any row, column, or
/// diagonal; the safety check in [`crate::safety`] enforces this before a
/// queen is committed.
///
/// # Examples
///
/// ```
/// use queensight_core::{Board, BoardSize, CellState, Position};
///
/// let mut board = Board::new(BoardSize::new(4).unwrap());
/// assert!(board.is_all_empty());
///
/// board.set(Position::new(1, 0), CellState::Queen);
/// assert_eq!(board.cell(Position::new(1, 0)), CellState::Queen);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates a board of the given size with every cell empty.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size.get() * size.get()],
        }
    }

    /// Returns the side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Returns the validated board size this board was created with.
    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }

    /// Sets the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn set(&mut self, pos: Position, state: CellState) {
        let index = self.index(pos);
        self.cells[index] = state;
    }

    /// Returns true if no cell holds a queen or an in-progress attempt.
    #[must_use]
    pub fn is_all_empty(&self) -> bool {
        self.cells.iter().all(CellState::is_empty)
    }

    /// Returns the positions of all cells in the given state, row-major.
    pub fn positions_in_state(&self, state: CellState) -> impl Iterator<Item = Position> + '_ {
        let size = self.size();
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == state)
            .map(move |(i, _)| Position::new(i / size, i % size))
    }

    /// Returns the queen's row for each column, if every column holds
    /// exactly one queen.
    #[must_use]
    pub fn queen_rows(&self) -> Option<Vec<usize>> {
        let n = self.size();
        let mut rows = Vec::with_capacity(n);
        for col in 0..n {
            let mut found = None;
            for row in 0..n {
                if self.cell(Position::new(row, col)).is_queen() {
                    if found.is_some() {
                        return None;
                    }
                    found = Some(row);
                }
            }
            rows.push(found?);
        }
        Some(rows)
    }

    /// Returns true if the board holds a complete, valid N-Queens solution:
    /// one queen per column and row, no two queens sharing a diagonal, and
    /// no leftover `Trying` marks.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        if self.positions_in_state(CellState::Trying).next().is_some() {
            return false;
        }
        let Some(rows) = self.queen_rows() else {
            return false;
        };
        for (col_a, &row_a) in rows.iter().enumerate() {
            for (col_b, &row_b) in rows.iter().enumerate().skip(col_a + 1) {
                if row_a == row_b || col_b - col_a == row_a.abs_diff(row_b) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true if a queen elsewhere on the board attacks `pos`.
    ///
    /// Unlike [`crate::is_safe`], this looks in every direction; it drives
    /// the threat overlay in the UI, not the search.
    #[must_use]
    pub fn is_attacked(&self, pos: Position) -> bool {
        self.positions_in_state(CellState::Queen).any(|queen| {
            queen != pos
                && (queen.row == pos.row
                    || queen.col == pos.col
                    || queen.row.abs_diff(pos.row) == queen.col.abs_diff(pos.col))
        })
    }

    fn index(&self, pos: Position) -> usize {
        let n = self.size();
        assert!(pos.row < n && pos.col < n, "position {pos} outside {n}x{n} board");
        pos.row * n + pos.col
    }
}
