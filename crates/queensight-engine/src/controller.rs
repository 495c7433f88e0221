//! Single-run orchestration.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use queensight_core::{Board, BoardSize};

use crate::{
    CancelToken, DEFAULT_STEP_DELAY, Pacer, RunOutcome, RunReport, SearchEngine, SnapshotSink,
};

/// Orchestrates search runs, guaranteeing at most one at a time.
///
/// The controller owns the running flag; cancellation travels through a
/// [`CancelToken`] the caller creates fresh for every run and passes into
/// [`solve`](Self::solve). Keeping the token per-run means a cancel
/// request can never be erased by the next run starting, and a token
/// cancelled before its run claims the flag still cancels that run. The
/// controller is cheap to clone; all clones share the running flag.
#[derive(Debug, Clone)]
pub struct RunController {
    running: Arc<AtomicBool>,
    step_delay: Duration,
}

impl Default for RunController {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

impl RunController {
    /// Creates a controller pausing `step_delay` between snapshots.
    #[must_use]
    pub fn new(step_delay: Duration) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            step_delay,
        }
    }

    /// Changes the pause used by subsequent runs.
    pub fn set_step_delay(&mut self, step_delay: Duration) {
        self.step_delay = step_delay;
    }

    /// Returns true while a run is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Runs one search to a terminal outcome.
    ///
    /// Returns `None` without touching any state if a run is already
    /// active. Otherwise: allocates a fresh board, publishes it so
    /// consumers observe the reset, and drives the engine from column 0
    /// under the given token.
    ///
    /// The cancellation token takes precedence over the engine's boolean
    /// result, so a cancel that races a terminal result still reports
    /// [`RunOutcome::Cancelled`]. An exhausted search reports a cleared
    /// board, not the last failed partial attempt; a cancelled one keeps
    /// the board as last mutated. The running flag is cleared on every
    /// path out.
    pub fn solve<S: SnapshotSink, P: Pacer>(
        &self,
        size: BoardSize,
        token: &CancelToken,
        sink: &mut S,
        pacer: &P,
    ) -> Option<RunReport> {
        if self.running.swap(true, Ordering::SeqCst) {
            log::debug!("solve request ignored: a run is already active");
            return None;
        }
        log::info!("starting {size}x{size} search");

        let board = Board::new(size);
        sink.publish(&board);
        pacer.pause(self.step_delay);

        let engine = SearchEngine::new(
            board,
            token.clone(),
            self.step_delay,
            sink,
            pacer,
        );
        let (solved, board) = engine.run();

        let report = if token.is_cancelled() {
            RunReport {
                outcome: RunOutcome::Cancelled,
                board,
            }
        } else if solved {
            RunReport {
                outcome: RunOutcome::Solved,
                board,
            }
        } else {
            RunReport {
                outcome: RunOutcome::Exhausted,
                board: Board::new(size),
            }
        };

        log::info!("{size}x{size} search finished: {}", report.outcome);
        self.running.store(false, Ordering::SeqCst);
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use queensight_core::{CellState, Position};

    use super::*;
    use crate::{NoPacer, RecordingSink};

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    fn solve(n: usize) -> (RunReport, Vec<Board>) {
        let controller = RunController::default();
        let mut sink = RecordingSink::new();
        let report = controller
            .solve(size(n), &CancelToken::new(), &mut sink, &NoPacer)
            .unwrap();
        (report, sink.into_snapshots())
    }

    #[test]
    fn first_snapshot_is_the_empty_board() {
        let (_, snapshots) = solve(4);
        assert!(snapshots[0].is_all_empty());
        assert_eq!(snapshots[0].size(), 4);
    }

    #[test]
    fn one_queen_solves_at_origin() {
        let (report, _) = solve(1);
        assert_eq!(report.outcome, RunOutcome::Solved);
        assert_eq!(report.board.cell(Position::new(0, 0)), CellState::Queen);
    }

    #[test]
    fn two_queens_exhausts_with_cleared_board() {
        let (report, _) = solve(2);
        assert_eq!(report.outcome, RunOutcome::Exhausted);
        assert!(report.board.is_all_empty());
    }

    #[test]
    fn four_queens_solution_is_pinned_and_valid() {
        let (report, _) = solve(4);
        assert_eq!(report.outcome, RunOutcome::Solved);
        assert_eq!(report.board.queen_rows(), Some(vec![1, 3, 0, 2]));
        assert!(report.board.is_valid_solution());
    }

    #[test]
    fn all_supported_sizes_terminate() {
        for n in 1..=10 {
            let (report, _) = solve(n);
            match report.outcome {
                RunOutcome::Solved => assert!(report.board.is_valid_solution()),
                RunOutcome::Exhausted => {
                    // Only 2x2 and 3x3 have no solution in range.
                    assert!(n == 2 || n == 3);
                    assert!(report.board.is_all_empty());
                }
                RunOutcome::Cancelled => panic!("nothing cancelled this run"),
            }
        }
    }

    #[test]
    fn solve_is_a_noop_while_running() {
        /// Triggers a nested solve from inside an active run.
        struct ReentrantSink {
            controller: RunController,
            nested_result_was_none: bool,
        }

        impl SnapshotSink for ReentrantSink {
            fn publish(&mut self, _board: &Board) {
                if !self.nested_result_was_none {
                    let mut inner = RecordingSink::new();
                    self.nested_result_was_none = self
                        .controller
                        .solve(size(4), &CancelToken::new(), &mut inner, &NoPacer)
                        .is_none();
                    assert!(inner.snapshots().is_empty());
                }
            }
        }

        let controller = RunController::default();
        let mut sink = ReentrantSink {
            controller: controller.clone(),
            nested_result_was_none: false,
        };
        let report = controller
            .solve(size(4), &CancelToken::new(), &mut sink, &NoPacer)
            .unwrap();

        assert!(sink.nested_result_was_none);
        assert_eq!(report.outcome, RunOutcome::Solved);
        assert!(!controller.is_running());
    }

    #[test]
    fn cancelled_run_reports_cancelled_and_keeps_last_board() {
        /// Cancels the run's token after a few snapshots.
        struct CancelDuringRun {
            token: CancelToken,
            remaining: usize,
            last_seen: Option<Board>,
        }

        impl SnapshotSink for CancelDuringRun {
            fn publish(&mut self, board: &Board) {
                self.last_seen = Some(board.clone());
                if self.remaining == 0 {
                    self.token.cancel();
                } else {
                    self.remaining -= 1;
                }
            }
        }

        let controller = RunController::default();
        let token = CancelToken::new();
        let mut sink = CancelDuringRun {
            token: token.clone(),
            remaining: 20,
            last_seen: None,
        };
        let report = controller.solve(size(8), &token, &mut sink, &NoPacer).unwrap();

        assert_eq!(report.outcome, RunOutcome::Cancelled);
        // Board is left exactly as last published, not cleared.
        assert_eq!(report.board, sink.last_seen.unwrap());
        assert!(!controller.is_running());
    }

    #[test]
    fn token_cancelled_before_the_run_claims_the_flag_still_cancels_it() {
        let controller = RunController::default();
        let token = CancelToken::new();
        token.cancel();

        let mut sink = RecordingSink::new();
        let report = controller.solve(size(8), &token, &mut sink, &NoPacer).unwrap();

        assert_eq!(report.outcome, RunOutcome::Cancelled);
        // Only the initial reset snapshot escapes; the engine never steps.
        assert_eq!(sink.snapshots().len(), 1);
        assert!(!controller.is_running());
    }

    #[test]
    fn per_run_tokens_keep_cancellation_scoped_to_one_run() {
        let controller = RunController::default();

        let first_token = CancelToken::new();
        first_token.cancel();
        let mut sink = RecordingSink::new();
        let first = controller
            .solve(size(4), &first_token, &mut sink, &NoPacer)
            .unwrap();
        assert_eq!(first.outcome, RunOutcome::Cancelled);

        // A fresh token means the old cancel cannot poison the next run.
        let mut sink = RecordingSink::new();
        let second = controller
            .solve(size(4), &CancelToken::new(), &mut sink, &NoPacer)
            .unwrap();
        assert_eq!(second.outcome, RunOutcome::Solved);
    }
}
