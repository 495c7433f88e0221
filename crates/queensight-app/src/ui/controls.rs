//! Sidebar controls.

use eframe::egui::{Button, DragValue, Slider, Ui};
use queensight_core::BoardSize;

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub(crate) fn show(
    ui: &mut Ui,
    app_state: &AppState,
    running: bool,
    queue: &mut ActionRequestQueue,
) {
    ui.heading("Queensight");
    ui.add_space(8.0);
    ui.separator();

    ui.label("Board size");
    let mut size = app_state.settings.board_size;
    let drag = ui.add_enabled(
        !running,
        DragValue::new(&mut size).range(BoardSize::MIN.get()..=BoardSize::MAX.get()),
    );
    if drag.changed() {
        queue.request(Action::SetBoardSize(size));
    }

    ui.add_space(8.0);
    ui.label("Step delay (ms)");
    let mut delay_ms = app_state.settings.step_delay_ms;
    if ui
        .add(Slider::new(&mut delay_ms, 10..=1000).logarithmic(true))
        .changed()
    {
        queue.request(Action::SetStepDelayMs(delay_ms));
    }

    ui.add_space(8.0);
    let mut show_attacks = app_state.settings.show_attacks;
    if ui
        .checkbox(&mut show_attacks, "Show attacked squares")
        .changed()
    {
        queue.request(Action::ToggleAttackOverlay);
    }

    ui.add_space(12.0);
    ui.separator();
    ui.horizontal(|ui| {
        if ui.add_enabled(!running, Button::new("▶ Solve")).clicked() {
            queue.request(Action::StartRun);
        }
        if ui.button("↺ Reset").clicked() {
            queue.request(Action::Reset);
        }
    });
}
