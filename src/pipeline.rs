//! The analysis pipeline: load → inspect → clean → summarize.
//!
//! Each stage takes and returns owned values; nothing is ambient. The
//! visualize stage lives in the UI layer and consumes the [`Analysis`]
//! this module produces.

use crate::data::model::{Dataset, LABEL_COLUMN, PETAL_LENGTH};
use crate::data::{clean, loader};
use crate::error::PipelineError;
use crate::stats::{self, GroupSummary};

/// Everything the chart window needs: the cleaned dataset and the grouped
/// aggregate.
pub struct Analysis {
    pub dataset: Dataset,
    pub petal_means: GroupSummary,
}

/// Run the textual part of the pipeline.
pub fn run() -> Result<Analysis, PipelineError> {
    let dataset = loader::load_bundled()?;
    inspect(&dataset);

    let dataset = clean::fill_missing(dataset)?;
    let petal_means = summarize(&dataset);

    Ok(Analysis {
        dataset,
        petal_means,
    })
}

// ---------------------------------------------------------------------------
// Inspect – first rows, dtypes, missing counts
// ---------------------------------------------------------------------------

fn inspect(dataset: &Dataset) {
    println!("\n--- First 5 Rows ---");
    print!("{:>5}", "");
    for column in &dataset.columns {
        print!("  {column:>14}");
    }
    println!("  {LABEL_COLUMN:>10}");

    for (idx, sample) in dataset.samples.iter().take(5).enumerate() {
        print!("{idx:>5}");
        for column in &dataset.columns {
            match sample.value(column) {
                Some(value) => print!("  {value:>14.1}"),
                None => print!("  {:>14}", "<null>"),
            }
        }
        println!("  {:>10}", sample.species.code());
    }

    println!("\n--- Data Info ---");
    println!("{} entries, {} columns", dataset.len(), dataset.columns.len() + 1);
    for column in &dataset.columns {
        let non_null = dataset.len() - dataset.missing_count(column);
        println!("{column:<14} {non_null:>4} non-null  f64");
    }
    println!("{LABEL_COLUMN:<14} {:>4} non-null  u8", dataset.len());

    println!("\n--- Missing Values ---");
    for column in &dataset.columns {
        println!("{column:<14} {:>4}", dataset.missing_count(column));
    }
    println!("{LABEL_COLUMN:<14} {:>4}", 0);
}

// ---------------------------------------------------------------------------
// Summarize – descriptive statistics and the grouped mean
// ---------------------------------------------------------------------------

fn summarize(dataset: &Dataset) -> GroupSummary {
    let summaries = stats::describe(dataset);

    println!("\n--- Basic Statistics ---");
    print!("{:>6}", "");
    for (column, _) in &summaries {
        print!("  {column:>14}");
    }
    println!();

    let rows: [(&str, fn(&stats::ColumnSummary) -> f64); 8] = [
        ("count", |s| s.count as f64),
        ("mean", |s| s.mean),
        ("std", |s| s.std_dev),
        ("min", |s| s.min),
        ("25%", |s| s.q1),
        ("50%", |s| s.median),
        ("75%", |s| s.q3),
        ("max", |s| s.max),
    ];
    for (name, extract) in rows {
        print!("{name:>6}");
        for (_, summary) in &summaries {
            print!("  {:>14.6}", extract(summary));
        }
        println!();
    }

    let petal_means = stats::group_mean(dataset, PETAL_LENGTH);

    println!("\n--- Average Petal Length by Species ---");
    for (species, mean) in &petal_means {
        println!("{} ({species})  {mean:.6}", species.code());
    }

    // The original's hand-written finding, derived from the data instead.
    if let Some((species, _)) = petal_means
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
    {
        println!("\nObservation: {species} has the highest average petal length.");
    }

    petal_means
}
