//! UI actions and their handler.

use std::mem;

use queensight_core::Board;
use queensight_engine::CancelToken;

use crate::{
    state::{AppState, RunSession, RunStatus, UiState},
    worker,
};

/// A request raised by the UI, applied once per frame by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Begin a run if none is active; no-op otherwise.
    StartRun,
    /// Cancel any active run and clear the board.
    Reset,
    /// Change the board size for the next run.
    SetBoardSize(usize),
    /// Change the snapshot pause for the next run.
    SetStepDelayMs(u64),
    /// Toggle the attacked-squares overlay.
    ToggleAttackOverlay,
}

/// FIFO queue of actions raised during a frame.
#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn take(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

/// Applies every queued action to the state.
pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    queue: &mut ActionRequestQueue,
) {
    for action in queue.take() {
        handle(app_state, ui_state, action);
    }
}

fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::StartRun => start_run(app_state, ui_state),
        Action::Reset => {
            ui_state.detach_active_run();
            app_state.reset_display();
        }
        Action::SetBoardSize(size) => {
            if ui_state.active_run.is_some() {
                log::debug!("ignoring board size change during an active run");
                return;
            }
            if app_state.settings.board_size != size {
                app_state.settings.board_size = size;
                app_state.board = Board::new(app_state.settings.board_size());
                app_state.status = RunStatus::Idle;
            }
        }
        Action::SetStepDelayMs(delay_ms) => {
            app_state.settings.step_delay_ms = delay_ms;
            app_state
                .controller
                .set_step_delay(app_state.settings.step_delay());
        }
        Action::ToggleAttackOverlay => {
            app_state.settings.show_attacks = !app_state.settings.show_attacks;
        }
    }
}

fn start_run(app_state: &mut AppState, ui_state: &mut UiState) {
    if ui_state.active_run.is_some() {
        log::debug!("start ignored: a run is already active");
        return;
    }
    app_state.status = RunStatus::Solving;
    ui_state.last_worker_error = None;
    // The token is created here, on the UI thread, so a reset issued in
    // the same frame already has something to cancel even if the worker
    // thread has not started yet.
    let token = CancelToken::new();
    ui_state.active_run = Some(RunSession {
        handle: worker::spawn_run(
            app_state.controller.clone(),
            app_state.settings.board_size(),
            token.clone(),
        ),
        token,
    });
}

#[cfg(test)]
mod tests {
    use crate::state::Settings;

    use super::*;

    #[test]
    fn board_size_change_reallocates_the_display_board() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        let mut queue = ActionRequestQueue::default();

        queue.request(Action::SetBoardSize(5));
        handle_all(&mut app_state, &mut ui_state, &mut queue);

        assert_eq!(app_state.board.size(), 5);
        assert!(app_state.board.is_all_empty());
    }

    #[test]
    fn reset_cancels_the_run_even_before_its_worker_starts() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        let mut queue = ActionRequestQueue::default();

        // Start and reset back to back; the worker thread may not have
        // claimed the running flag yet when the reset lands.
        queue.request(Action::StartRun);
        queue.request(Action::Reset);
        handle_all(&mut app_state, &mut ui_state, &mut queue);

        assert!(ui_state.active_run.is_none());
        assert_eq!(ui_state.cancelled_runs.len(), 1);
        assert!(ui_state.cancelled_runs[0].token.is_cancelled());
        assert_eq!(app_state.status, RunStatus::Idle);
        assert!(app_state.board.is_all_empty());
    }

    #[test]
    fn start_is_ignored_while_a_run_is_active() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        let mut queue = ActionRequestQueue::default();

        queue.request(Action::StartRun);
        queue.request(Action::StartRun);
        handle_all(&mut app_state, &mut ui_state, &mut queue);

        assert!(ui_state.active_run.is_some());
        assert!(ui_state.cancelled_runs.is_empty());

        // Leave no run behind when the test ends.
        ui_state.detach_active_run();
    }

    #[test]
    fn delay_change_applies_to_settings() {
        let mut app_state = AppState::new(Settings::default());
        let mut ui_state = UiState::default();
        let mut queue = ActionRequestQueue::default();

        queue.request(Action::SetStepDelayMs(40));
        queue.request(Action::ToggleAttackOverlay);
        handle_all(&mut app_state, &mut ui_state, &mut queue);

        assert_eq!(app_state.settings.step_delay_ms, 40);
        assert!(app_state.settings.show_attacks);
    }
}
