//! Queensight desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Queensight application.

use queensight_app::app::QueensightApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.queensight";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 650.0))
            .with_min_inner_size((500.0, 400.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Queensight",
        options,
        Box::new(|cc| Ok(Box::new(QueensightApp::new(cc)))),
    )
}
