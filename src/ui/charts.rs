use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::{PETAL_LENGTH, SEPAL_LENGTH};
use crate::state::{ChartData, TREND_SAMPLES};

// ---------------------------------------------------------------------------
// 1. Line chart – sepal length over the first 50 samples
// ---------------------------------------------------------------------------

pub fn sepal_trend_line(ui: &mut Ui, data: &ChartData, height: f32) {
    ui.strong("Sepal Length Trend (First 50 Samples)");

    let points: PlotPoints = data
        .dataset
        .samples
        .iter()
        .take(TREND_SAMPLES)
        .enumerate()
        .map(|(idx, sample)| {
            [
                idx as f64,
                sample.value(SEPAL_LENGTH).unwrap_or(f64::NAN),
            ]
        })
        .collect();

    Plot::new("sepal_trend")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Sample Index")
        .y_axis_label("Sepal Length (cm)")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("Sepal Length")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );
        });
}

// ---------------------------------------------------------------------------
// 2. Bar chart – average petal length per species
// ---------------------------------------------------------------------------

pub fn petal_mean_bars(ui: &mut Ui, data: &ChartData, height: f32) {
    ui.strong("Average Petal Length per Species");

    let bars: Vec<Bar> = data
        .petal_means
        .iter()
        .map(|(species, mean)| {
            Bar::new(species.code() as f64, *mean)
                .width(0.6)
                .fill(data.color_map.color_for(*species))
                .name(species.to_string())
        })
        .collect();

    Plot::new("petal_means")
        .height(height)
        .x_axis_label("Species (0=setosa, 1=versicolor, 2=virginica)")
        .y_axis_label("Average Petal Length (cm)")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// 3. Histogram – sepal width distribution, 20 bins
// ---------------------------------------------------------------------------

pub fn sepal_width_histogram(ui: &mut Ui, data: &ChartData, height: f32) {
    ui.strong("Distribution of Sepal Width");

    let fill = Color32::from_rgba_unmultiplied(128, 0, 128, 200);
    let bars: Vec<Bar> = data
        .sepal_width_bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center, bin.count as f64)
                .width(bin.width)
                .fill(fill)
        })
        .collect();

    Plot::new("sepal_width_hist")
        .height(height)
        .x_axis_label("Sepal Width (cm)")
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// 4. Scatter plot – sepal length vs petal length, coloured by species
// ---------------------------------------------------------------------------

pub fn sepal_vs_petal_scatter(ui: &mut Ui, data: &ChartData, height: f32) {
    ui.strong("Sepal Length vs Petal Length");

    Plot::new("sepal_vs_petal")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Sepal Length (cm)")
        .y_axis_label("Petal Length (cm)")
        .show(ui, |plot_ui| {
            for (species, color) in data.color_map.legend_entries() {
                let points: PlotPoints = data
                    .dataset
                    .samples
                    .iter()
                    .filter(|s| s.species == species)
                    .filter_map(|s| Some([s.value(SEPAL_LENGTH)?, s.value(PETAL_LENGTH)?]))
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(species.to_string())
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}
