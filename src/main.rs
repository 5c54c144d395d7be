// Exam Display Application
// Main entry point

use anyhow::anyhow;
use exam_display::ui::ExamDisplayApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Exam Display");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Exam Control Center")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exam Control Center",
        options,
        Box::new(|cc| Ok(Box::new(ExamDisplayApp::new(cc)))),
    )
    .map_err(|err| anyhow!("failed to run the display: {err}"))
}
