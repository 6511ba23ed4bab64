mod app;
mod color;
mod data;
mod error;
mod pipeline;
mod state;
mod stats;
mod ui;

use app::IrisStudioApp;
use eframe::egui;
use error::PipelineError;
use state::ChartData;

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let analysis = pipeline::run()?;
    let data = ChartData::new(analysis);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(IrisStudioApp::new(data)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to present charts: {e}"))?;

    Ok(())
}
