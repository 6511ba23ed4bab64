use std::collections::BTreeMap;

use crate::data::model::{Dataset, Species};

/// Per-label-code mean of a chosen numeric column.
/// `BTreeMap` keeps iteration in ascending code order.
pub type GroupSummary = BTreeMap<Species, f64>;

// ---------------------------------------------------------------------------
// Scalar helpers
// ---------------------------------------------------------------------------

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator); `NaN` below two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

/// The p-th percentile (0..=100) of an ascending-sorted slice, using linear
/// interpolation between order statistics.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = (p / 100.0) * (sorted.len() as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let frac = rank - lower as f64;
    (1.0 - frac) * sorted[lower] + frac * sorted[upper]
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize one column's non-missing values.
pub fn summarize_column(values: &[f64]) -> ColumnSummary {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    ColumnSummary {
        count: sorted.len(),
        mean: mean(&sorted),
        std_dev: sample_std(&sorted),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q1: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q3: percentile(&sorted, 75.0),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Descriptive statistics for every numeric column, in column order.
pub fn describe(dataset: &Dataset) -> Vec<(String, ColumnSummary)> {
    dataset
        .columns
        .iter()
        .map(|column| {
            let values = dataset.present_values(column);
            (column.clone(), summarize_column(&values))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Grouped aggregation
// ---------------------------------------------------------------------------

/// Mean of one numeric column per species, keys in ascending code order.
/// Only species actually present in the dataset appear.
pub fn group_mean(dataset: &Dataset, column: &str) -> GroupSummary {
    let mut sums: BTreeMap<Species, (f64, usize)> = BTreeMap::new();

    for sample in &dataset.samples {
        if let Some(value) = sample.value(column) {
            let entry = sums.entry(sample.species).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(species, (sum, count))| (species, sum / count as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One histogram bin: center position, width, and occupancy.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

/// Bin values into `bin_count` equal-width bins spanning [min, max].
/// Values equal to the maximum land in the last bin.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let width = if span.abs() < f64::EPSILON {
        1.0
    } else {
        span / bin_count as f64
    };

    let mut counts = vec![0usize; bin_count];
    for &value in values {
        let idx = (((value - min) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Sample, PETAL_LENGTH};
    use approx::assert_relative_eq;

    fn sample(petal_length: f64, species: Species) -> Sample {
        Sample::new([Some(5.0), Some(3.0), Some(petal_length), Some(0.2)], species)
    }

    #[test]
    fn mean_and_std_of_known_values() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&values), 5.0);
        // Sample variance of this set is 32/7.
        assert_relative_eq!(sample_std(&values), (32.0f64 / 7.0).sqrt());
    }

    #[test]
    fn mean_of_empty_slice_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(sample_std(&[1.0]).is_nan());
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let summary = summarize_column(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(summary.count, 4);
        assert_relative_eq!(summary.min, 1.0);
        assert_relative_eq!(summary.q1, 1.75);
        assert_relative_eq!(summary.median, 2.5);
        assert_relative_eq!(summary.q3, 3.25);
        assert_relative_eq!(summary.max, 4.0);
    }

    #[test]
    fn group_mean_has_one_entry_per_present_species() {
        let dataset = Dataset::from_samples(vec![
            sample(1.4, Species::Setosa),
            sample(1.6, Species::Setosa),
            sample(4.7, Species::Versicolor),
        ]);

        let means = group_mean(&dataset, PETAL_LENGTH);
        assert_eq!(means.len(), 2);
        assert_relative_eq!(means[&Species::Setosa], 1.5);
        assert_relative_eq!(means[&Species::Versicolor], 4.7);
        assert!(!means.contains_key(&Species::Virginica));
    }

    #[test]
    fn group_mean_keys_ascend_by_code() {
        let dataset = Dataset::from_samples(vec![
            sample(5.5, Species::Virginica),
            sample(1.4, Species::Setosa),
            sample(4.2, Species::Versicolor),
        ]);

        let codes: Vec<u8> = group_mean(&dataset, PETAL_LENGTH)
            .keys()
            .map(|s| s.code())
            .collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn describe_is_idempotent() {
        let dataset = Dataset::from_samples(vec![
            sample(1.4, Species::Setosa),
            sample(4.7, Species::Versicolor),
            sample(6.0, Species::Virginica),
        ]);
        assert_eq!(describe(&dataset), describe(&dataset));
    }

    #[test]
    fn histogram_covers_all_values() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
        let bins = histogram(&values, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn histogram_of_constant_values() {
        let bins = histogram(&[3.0, 3.0, 3.0], 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    }
}
