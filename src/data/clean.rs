use std::collections::BTreeMap;

use super::model::Dataset;
use crate::error::PipelineError;
use crate::stats;

/// Replace every missing numeric cell with its column's mean over the
/// non-missing entries. The fill values are computed before any cell is
/// touched, so filling never shifts a column's mean.
///
/// Fails with [`PipelineError::InvalidColumn`] when a column has zero
/// non-missing entries and its mean is therefore undefined.
pub fn fill_missing(mut dataset: Dataset) -> Result<Dataset, PipelineError> {
    let mut fill_values: BTreeMap<String, f64> = BTreeMap::new();

    for column in &dataset.columns {
        let present = dataset.present_values(column);
        if present.is_empty() {
            return Err(PipelineError::InvalidColumn(column.clone()));
        }
        fill_values.insert(column.clone(), stats::mean(&present));
    }

    let mut filled = 0usize;
    for sample in &mut dataset.samples {
        for (column, cell) in sample.measurements.iter_mut() {
            if cell.is_none() {
                *cell = fill_values.get(column).copied();
                filled += 1;
            }
        }
    }

    if filled > 0 {
        log::info!("filled {filled} missing cells with column means");
    }
    Ok(dataset)
}
