use crate::color::ColorMap;
use crate::data::model::{Dataset, SEPAL_WIDTH};
use crate::pipeline::Analysis;
use crate::stats::{self, GroupSummary, HistogramBin};

/// Fixed bin count of the sepal-width histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Number of leading rows shown by the trend line chart.
pub const TREND_SAMPLES: usize = 50;

// ---------------------------------------------------------------------------
// Chart window state
// ---------------------------------------------------------------------------

/// Everything the chart window renders from, built once and read-only.
pub struct ChartData {
    /// Cleaned dataset.
    pub dataset: Dataset,

    /// Mean petal length per species, ascending by code.
    pub petal_means: GroupSummary,

    /// Fixed colour per species code.
    pub color_map: ColorMap,

    /// Pre-binned sepal-width distribution.
    pub sepal_width_bins: Vec<HistogramBin>,
}

impl ChartData {
    pub fn new(analysis: Analysis) -> Self {
        let Analysis {
            dataset,
            petal_means,
        } = analysis;

        let color_map = ColorMap::new(&dataset.species_present());
        let sepal_width_bins =
            stats::histogram(&dataset.present_values(SEPAL_WIDTH), HISTOGRAM_BINS);

        ChartData {
            dataset,
            petal_means,
            color_map,
            sepal_width_bins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader;
    use crate::data::model::PETAL_LENGTH;

    #[test]
    fn chart_data_bins_the_full_dataset() {
        let dataset = loader::load_bundled().unwrap();
        let petal_means = stats::group_mean(&dataset, PETAL_LENGTH);
        let data = ChartData::new(Analysis {
            dataset,
            petal_means,
        });

        assert_eq!(data.sepal_width_bins.len(), HISTOGRAM_BINS);
        let binned: usize = data.sepal_width_bins.iter().map(|b| b.count).sum();
        assert_eq!(binned, data.dataset.len());
    }
}
