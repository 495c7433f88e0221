//! The recursive backtracking search.

use std::time::Duration;

use queensight_core::{Board, CellState, Position, is_safe};

use crate::{CancelToken, Pacer, SnapshotSink};

/// Default pause between snapshots.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(150);

/// A single depth-first N-Queens search over one board.
///
/// The engine fills columns left to right. For each candidate row it marks
/// the cell [`CellState::Trying`], publishes, pauses, then either commits a
/// queen and recurses or reverts the cell. Suspension happens only at the
/// four points where a snapshot has just been published (after marking
/// Trying, after committing a queen, after a backtrack revert, and after an
/// unsafe-cell revert at half delay), never inside the safety check.
///
/// Cancellation is polled at column entry, before each trial, and after
/// each pause; once observed, the engine stops mutating the board and
/// publishing snapshots. At most one cell is in the Trying state at any
/// instant of a non-cancelled run.
#[derive(Debug)]
pub struct SearchEngine<'a, S, P> {
    board: Board,
    token: CancelToken,
    step_delay: Duration,
    sink: &'a mut S,
    pacer: &'a P,
}

impl<'a, S: SnapshotSink, P: Pacer> SearchEngine<'a, S, P> {
    /// Creates an engine over a freshly allocated board.
    pub fn new(
        board: Board,
        token: CancelToken,
        step_delay: Duration,
        sink: &'a mut S,
        pacer: &'a P,
    ) -> Self {
        Self {
            board,
            token,
            step_delay,
            sink,
            pacer,
        }
    }

    /// Runs the search from column 0 to completion, cancellation, or
    /// exhaustion. Returns whether a solution was committed, along with the
    /// board in its terminal state.
    ///
    /// A cancelled run also returns `false`; callers that need to
    /// distinguish cancellation must consult the token, which the
    /// [`RunController`](crate::RunController) does.
    #[must_use]
    pub fn run(mut self) -> (bool, Board) {
        let solved = self.search_column(0);
        (solved, self.board)
    }

    fn search_column(&mut self, col: usize) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        if col == self.board.size() {
            return true;
        }

        for row in 0..self.board.size() {
            if self.token.is_cancelled() {
                return false;
            }

            let pos = Position::new(row, col);
            self.board.set(pos, CellState::Trying);
            self.publish_and_pause(self.step_delay);
            if self.token.is_cancelled() {
                return false;
            }

            if is_safe(&self.board, row, col) {
                self.board.set(pos, CellState::Queen);
                self.publish_and_pause(self.step_delay);

                if self.search_column(col + 1) {
                    return true;
                }
                if self.token.is_cancelled() {
                    return false;
                }

                // Backtrack: undo the committed queen and keep scanning.
                self.board.set(pos, CellState::Empty);
                self.publish_and_pause(self.step_delay);
            } else {
                self.board.set(pos, CellState::Empty);
                self.publish_and_pause(self.step_delay / 2);
            }
        }

        false
    }

    fn publish_and_pause(&mut self, delay: Duration) {
        self.sink.publish(&self.board);
        self.pacer.pause(delay);
    }
}
