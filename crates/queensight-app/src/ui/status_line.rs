//! Run status display.

use eframe::egui::{Color32, RichText, Spinner, Ui};

use crate::state::RunStatus;

pub(crate) fn show(ui: &mut Ui, status: RunStatus) {
    ui.horizontal(|ui| {
        let color = match status {
            RunStatus::Idle | RunStatus::Solving => ui.visuals().text_color(),
            RunStatus::Solved => Color32::from_rgb(0x3c, 0xb0, 0x43),
            RunStatus::Exhausted | RunStatus::Cancelled => ui.visuals().warn_fg_color,
        };
        ui.label(RichText::new(status.text()).color(color).strong());
        if status == RunStatus::Solving {
            ui.add(Spinner::new());
        }
    });
}
