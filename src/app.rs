use eframe::egui;

use crate::state::ChartData;
use crate::ui::charts;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Presents the four charts in a 2×2 grid, in pipeline order:
/// line, bar, histogram, scatter.
pub struct IrisStudioApp {
    data: ChartData,
}

impl IrisStudioApp {
    pub fn new(data: ChartData) -> Self {
        Self { data }
    }
}

impl eframe::App for IrisStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Leave room for the chart titles above each plot.
            let row_height = ui.available_height() / 2.0 - 28.0;

            ui.columns(2, |cols| {
                charts::sepal_trend_line(&mut cols[0], &self.data, row_height);
                charts::petal_mean_bars(&mut cols[1], &self.data, row_height);
            });
            ui.columns(2, |cols| {
                charts::sepal_width_histogram(&mut cols[0], &self.data, row_height);
                charts::sepal_vs_petal_scatter(&mut cols[1], &self.data, row_height);
            });
        });
    }
}
