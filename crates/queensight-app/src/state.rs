//! Application and UI state.

use std::time::Duration;

use queensight_core::{Board, BoardSize};
use queensight_engine::{CancelToken, RunController, RunOutcome, RunReport};

use crate::worker::{RunHandle, WorkerError};

/// User-facing run status, mapped to the fixed status text set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStatus {
    Idle,
    Solving,
    Solved,
    Exhausted,
    Cancelled,
}

impl RunStatus {
    #[must_use]
    pub(crate) fn text(self) -> &'static str {
        match self {
            RunStatus::Idle => "Ready",
            RunStatus::Solving => "Solving in progress…",
            RunStatus::Solved => "Solution found!",
            RunStatus::Exhausted => "No solution found",
            RunStatus::Cancelled => "Cancelled",
        }
    }

    #[must_use]
    pub(crate) fn from_outcome(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Solved => RunStatus::Solved,
            RunOutcome::Exhausted => RunStatus::Exhausted,
            RunOutcome::Cancelled => RunStatus::Cancelled,
        }
    }
}

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) struct Settings {
    pub(crate) board_size: usize,
    pub(crate) step_delay_ms: u64,
    pub(crate) show_attacks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BoardSize::DEFAULT.get(),
            step_delay_ms: 150,
            show_attacks: false,
        }
    }
}

impl Settings {
    /// The validated board size; falls back to the default if a stale
    /// persisted value is out of range.
    #[must_use]
    pub(crate) fn board_size(&self) -> BoardSize {
        BoardSize::new(self.board_size).unwrap_or_default()
    }

    #[must_use]
    pub(crate) fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

/// Persistent application state: the displayed board, the run status, and
/// the controller guarding the single active run.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) settings: Settings,
    pub(crate) board: Board,
    pub(crate) status: RunStatus,
    pub(crate) controller: RunController,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        let board = Board::new(settings.board_size());
        let controller = RunController::new(settings.step_delay());
        Self {
            settings,
            board,
            status: RunStatus::Idle,
            controller,
        }
    }

    /// Replaces the displayed board with a freshly published snapshot.
    pub(crate) fn apply_snapshot(&mut self, board: Board) {
        self.board = board;
    }

    /// Applies a terminal run report.
    ///
    /// Solved shows the solution and Exhausted shows the cleared board; a
    /// cancelled run only updates the status, leaving whatever board is
    /// currently displayed. The asymmetry is intentional.
    pub(crate) fn apply_report(&mut self, report: RunReport) {
        self.status = RunStatus::from_outcome(report.outcome);
        match report.outcome {
            RunOutcome::Solved | RunOutcome::Exhausted => self.board = report.board,
            RunOutcome::Cancelled => {}
        }
    }

    /// Clears the board and restores the initial status. Cancelling any
    /// active run is the UI state's job; see
    /// [`UiState::detach_active_run`]. Idempotent: repeated resets leave
    /// the state unchanged.
    pub(crate) fn reset_display(&mut self) {
        self.board = Board::new(self.settings.board_size());
        self.status = RunStatus::Idle;
    }
}

/// One spawned run: the event handle paired with the token that cancels
/// exactly this run and no other.
#[derive(Debug)]
pub(crate) struct RunSession {
    pub(crate) handle: RunHandle,
    pub(crate) token: CancelToken,
}

/// Transient UI state that is never persisted.
///
/// At most one run is active; runs detached by a reset move to
/// `cancelled_runs`, where they are drained only for their terminal report
/// so their stale snapshots never reach the display.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_run: Option<RunSession>,
    pub(crate) cancelled_runs: Vec<RunSession>,
    pub(crate) last_worker_error: Option<WorkerError>,
}

impl UiState {
    /// Cancels the active run, if any, and moves it to the cancelled list.
    ///
    /// The token is cancelled unconditionally, so a run whose worker has
    /// not yet claimed the controller's flag is cancelled too.
    pub(crate) fn detach_active_run(&mut self) {
        if let Some(session) = self.active_run.take() {
            session.token.cancel();
            self.cancelled_runs.push(session);
        }
    }

    #[must_use]
    pub(crate) fn has_pending_events(&self) -> bool {
        self.active_run.is_some() || !self.cancelled_runs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use queensight_core::{CellState, Position};

    use super::*;

    fn solved_report(n: usize, rows: &[usize]) -> RunReport {
        let mut board = Board::new(BoardSize::new(n).unwrap());
        for (col, &row) in rows.iter().enumerate() {
            board.set(Position::new(row, col), CellState::Queen);
        }
        RunReport {
            outcome: RunOutcome::Solved,
            board,
        }
    }

    #[test]
    fn status_text_matches_fixed_set() {
        assert_eq!(RunStatus::Idle.text(), "Ready");
        assert_eq!(RunStatus::Solving.text(), "Solving in progress…");
        assert_eq!(RunStatus::Solved.text(), "Solution found!");
        assert_eq!(RunStatus::Exhausted.text(), "No solution found");
        assert_eq!(RunStatus::Cancelled.text(), "Cancelled");
    }

    #[test]
    fn solved_report_replaces_the_board() {
        let mut state = AppState::new(Settings {
            board_size: 4,
            ..Settings::default()
        });
        state.apply_report(solved_report(4, &[1, 3, 0, 2]));
        assert_eq!(state.status, RunStatus::Solved);
        assert!(state.board.is_valid_solution());
    }

    #[test]
    fn exhausted_report_shows_the_cleared_board() {
        let mut state = AppState::new(Settings {
            board_size: 2,
            ..Settings::default()
        });
        state.board.set(Position::new(0, 0), CellState::Queen);
        state.apply_report(RunReport {
            outcome: RunOutcome::Exhausted,
            board: Board::new(BoardSize::new(2).unwrap()),
        });
        assert_eq!(state.status, RunStatus::Exhausted);
        assert!(state.board.is_all_empty());
    }

    #[test]
    fn cancelled_report_keeps_the_displayed_board() {
        let mut state = AppState::new(Settings::default());
        state.board.set(Position::new(3, 3), CellState::Queen);
        let board = state.board.clone();
        state.apply_report(RunReport {
            outcome: RunOutcome::Cancelled,
            board: Board::new(state.settings.board_size()),
        });
        assert_eq!(state.status, RunStatus::Cancelled);
        assert_eq!(state.board, board);
    }

    #[test]
    fn reset_display_clears_board_and_status_and_is_idempotent() {
        let mut state = AppState::new(Settings::default());
        state.apply_report(solved_report(8, &[0, 4, 7, 5, 2, 6, 1, 3]));

        state.reset_display();
        assert!(state.board.is_all_empty());
        assert_eq!(state.status, RunStatus::Idle);

        state.reset_display();
        assert!(state.board.is_all_empty());
        assert_eq!(state.status, RunStatus::Idle);
    }

    #[test]
    fn detaching_cancels_the_active_run_token() {
        let mut ui = UiState::default();
        assert!(!ui.has_pending_events());
        ui.detach_active_run();
        assert!(ui.cancelled_runs.is_empty());

        let token = CancelToken::new();
        let controller = RunController::new(Duration::from_millis(5));
        ui.active_run = Some(RunSession {
            handle: crate::worker::spawn_run(
                controller,
                BoardSize::new(8).unwrap(),
                token.clone(),
            ),
            token: token.clone(),
        });

        ui.detach_active_run();
        assert!(token.is_cancelled());
        assert!(ui.active_run.is_none());
        assert_eq!(ui.cancelled_runs.len(), 1);
        assert!(ui.has_pending_events());
    }

    #[test]
    fn out_of_range_persisted_size_falls_back_to_default() {
        let settings = Settings {
            board_size: 64,
            ..Settings::default()
        };
        assert_eq!(settings.board_size(), BoardSize::DEFAULT);
    }
}
