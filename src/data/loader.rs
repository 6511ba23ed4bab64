use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{Dataset, Sample, Species};
use crate::error::PipelineError;

/// The bundled 150-sample iris table, compiled into the binary.
const BUNDLED_CSV: &str = include_str!("../../data/iris.csv");

/// One raw CSV row. Empty numeric cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    sepal_length: Option<f64>,
    sepal_width: Option<f64>,
    petal_length: Option<f64>,
    petal_width: Option<f64>,
    species: u8,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the bundled iris dataset.
pub fn load_bundled() -> Result<Dataset, PipelineError> {
    let dataset = parse_csv(BUNDLED_CSV.as_bytes())
        .map_err(|e| PipelineError::DataUnavailable(format!("{e:#}")))?;

    if dataset.is_empty() {
        return Err(PipelineError::DataUnavailable(
            "bundled table has no rows".to_string(),
        ));
    }

    log::info!(
        "loaded {} samples with columns {:?}",
        dataset.len(),
        dataset.columns
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with the four measurement columns and `species`.
/// Measurement cells may be empty (missing); `species` is a 0/1/2 code.
fn parse_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut samples = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let species = Species::from_code(record.species)
            .with_context(|| format!("CSV row {row_no}: unknown species code {}", record.species))?;

        samples.push(Sample::new(
            [
                record.sepal_length,
                record.sepal_width,
                record.petal_length,
                record.petal_width,
            ],
            species,
        ));
    }

    Ok(Dataset::from_samples(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::NUMERIC_COLUMNS;

    #[test]
    fn bundled_table_is_complete() {
        let dataset = load_bundled().unwrap();
        assert_eq!(dataset.len(), 150);
        for column in NUMERIC_COLUMNS {
            assert_eq!(dataset.missing_count(column), 0);
        }
        for species in Species::ALL {
            let count = dataset
                .samples
                .iter()
                .filter(|s| s.species == species)
                .count();
            assert_eq!(count, 50, "expected 50 samples of {species}");
        }
    }

    #[test]
    fn empty_cells_become_missing_values() {
        let csv = "sepal_length,sepal_width,petal_length,petal_width,species\n\
                   5.1,,1.4,0.2,0\n";
        let dataset = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.missing_count("sepal_width"), 1);
        assert_eq!(dataset.missing_count("sepal_length"), 0);
    }

    #[test]
    fn unknown_species_code_is_rejected() {
        let csv = "sepal_length,sepal_width,petal_length,petal_width,species\n\
                   5.1,3.5,1.4,0.2,7\n";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }
}
