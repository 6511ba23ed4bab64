use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const SEPAL_LENGTH: &str = "sepal_length";
pub const SEPAL_WIDTH: &str = "sepal_width";
pub const PETAL_LENGTH: &str = "petal_length";
pub const PETAL_WIDTH: &str = "petal_width";

/// The numeric measurement columns, in source order.
pub const NUMERIC_COLUMNS: [&str; 4] = [SEPAL_LENGTH, SEPAL_WIDTH, PETAL_LENGTH, PETAL_WIDTH];

/// Name of the categorical label column.
pub const LABEL_COLUMN: &str = "species";

// ---------------------------------------------------------------------------
// Species – the categorical label
// ---------------------------------------------------------------------------

/// One of the three iris species, identified by its small integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// All species in ascending code order.
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Map a label code to a species.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Species::Setosa),
            1 => Some(Species::Versicolor),
            2 => Some(Species::Virginica),
            _ => None,
        }
    }

    /// The label code for this species.
    pub fn code(self) -> u8 {
        match self {
            Species::Setosa => 0,
            Species::Versicolor => 1,
            Species::Virginica => 2,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Setosa => write!(f, "setosa"),
            Species::Versicolor => write!(f, "versicolor"),
            Species::Virginica => write!(f, "virginica"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sample – one row of the table
// ---------------------------------------------------------------------------

/// A single sample (one row of the source table).
///
/// Each numeric column is present as a key; a missing measurement is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Numeric measurement cells: column_name → value.
    pub measurements: BTreeMap<String, Option<f64>>,
    /// Categorical label, always present.
    pub species: Species,
}

impl Sample {
    /// Build a sample from the four measurements in [`NUMERIC_COLUMNS`] order.
    pub fn new(values: [Option<f64>; 4], species: Species) -> Self {
        let measurements = NUMERIC_COLUMNS
            .iter()
            .zip(values)
            .map(|(col, val)| (col.to_string(), val))
            .collect();
        Sample {
            measurements,
            species,
        }
    }

    /// The value of a numeric column, `None` when missing.
    pub fn value(&self, column: &str) -> Option<f64> {
        self.measurements.get(column).copied().flatten()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full table: ordered samples plus the ordered numeric column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// All samples (rows), in source order.
    pub samples: Vec<Sample>,
    /// Ordered numeric column names (excludes the label column).
    pub columns: Vec<String>,
}

impl Dataset {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Dataset {
            samples,
            columns: NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The non-missing values of one numeric column, in row order.
    pub fn present_values(&self, column: &str) -> Vec<f64> {
        self.samples.iter().filter_map(|s| s.value(column)).collect()
    }

    /// Count of missing cells in one numeric column.
    pub fn missing_count(&self, column: &str) -> usize {
        self.samples
            .iter()
            .filter(|s| s.value(column).is_none())
            .count()
    }

    /// The sorted set of species present in the dataset.
    pub fn species_present(&self) -> BTreeSet<Species> {
        self.samples.iter().map(|s| s.species).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_codes_round_trip() {
        for species in Species::ALL {
            assert_eq!(Species::from_code(species.code()), Some(species));
        }
        assert_eq!(Species::from_code(3), None);
    }

    #[test]
    fn sample_reports_missing_cells() {
        let sample = Sample::new([Some(5.1), None, Some(1.4), Some(0.2)], Species::Setosa);
        assert_eq!(sample.value(SEPAL_LENGTH), Some(5.1));
        assert_eq!(sample.value(SEPAL_WIDTH), None);
    }

    #[test]
    fn dataset_column_access() {
        let dataset = Dataset::from_samples(vec![
            Sample::new([Some(5.1), Some(3.5), Some(1.4), Some(0.2)], Species::Setosa),
            Sample::new([Some(7.0), None, Some(4.7), Some(1.4)], Species::Versicolor),
        ]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.missing_count(SEPAL_WIDTH), 1);
        assert_eq!(dataset.present_values(SEPAL_WIDTH), vec![3.5]);
        assert_eq!(dataset.species_present().len(), 2);
    }
}
