//! Queensight desktop application.
//!
//! The update loop polls the background run for events, applies queued UI
//! actions, and paints the board. All search work happens off the UI
//! thread; the UI only ever observes snapshots and the terminal report.

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel},
};

use crate::{
    action::{self, ActionRequestQueue},
    state::{AppState, RunStatus, Settings, UiState},
    ui,
    worker::RunEvent,
};

const SETTINGS_KEY: &str = "queensight-settings";

#[derive(Debug)]
pub struct QueensightApp {
    app_state: AppState,
    ui_state: UiState,
}

impl QueensightApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
            .unwrap_or_default();
        Self {
            app_state: AppState::new(settings),
            ui_state: UiState::default(),
        }
    }

    /// Drains all pending run events into the app state.
    ///
    /// Detached (reset-cancelled) runs are drained first and only for
    /// their terminal report; any snapshots they still had in flight are
    /// discarded so they never overwrite the freshly cleared board.
    fn poll_run(&mut self) {
        self.poll_cancelled_runs();
        self.poll_active_run();
    }

    fn poll_cancelled_runs(&mut self) {
        let app_state = &mut self.app_state;
        self.ui_state.cancelled_runs.retain_mut(|session| {
            loop {
                match session.handle.poll() {
                    Ok(Some(RunEvent::Snapshot(_))) => {}
                    Ok(Some(RunEvent::Finished(report))) => {
                        // Only surface the cancellation if nothing newer
                        // has happened since the reset; a run started
                        // afterwards owns the status now.
                        if report.outcome.is_cancelled()
                            && app_state.status == RunStatus::Idle
                        {
                            app_state.status = RunStatus::Cancelled;
                        }
                        return false;
                    }
                    Ok(None) => return true,
                    Err(err) => {
                        log::error!("cancelled run worker error: {err}");
                        return false;
                    }
                }
            }
        });
    }

    fn poll_active_run(&mut self) {
        let Some(mut session) = self.ui_state.active_run.take() else {
            return;
        };
        loop {
            match session.handle.poll() {
                Ok(Some(RunEvent::Snapshot(board))) => self.app_state.apply_snapshot(board),
                Ok(Some(RunEvent::Finished(report))) => {
                    self.app_state.apply_report(report);
                    return;
                }
                Ok(None) => {
                    self.ui_state.active_run = Some(session);
                    return;
                }
                Err(err) => {
                    log::error!("run worker error: {err}");
                    self.ui_state.last_worker_error = Some(err);
                    return;
                }
            }
        }
    }
}

impl App for QueensightApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.app_state.settings);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_run();

        let mut action_queue = ActionRequestQueue::default();

        SidePanel::right("controls")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                let running = self.ui_state.active_run.is_some();
                ui::controls::show(ui, &self.app_state, running, &mut action_queue);
            });

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui::status_line::show(ui, self.app_state.status);
        });

        CentralPanel::default().show(ctx, |ui| {
            let vm =
                ui::grid::GridViewModel::new(&self.app_state.board, self.app_state.settings.show_attacks);
            ui::grid::show(ui, &vm);
        });

        action::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        // Keep polling while any run, active or winding down, can still
        // produce events.
        if self.ui_state.has_pending_events() {
            ctx.request_repaint();
        }
    }
}
