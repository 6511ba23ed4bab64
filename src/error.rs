use thiserror::Error;

/// Failure modes of the analysis pipeline.
///
/// `main` maps any of these to a logged message and a non-zero exit code.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The bundled dataset could not be parsed or was empty.
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    /// A numeric column has no non-missing values, so its mean is undefined.
    #[error("column '{0}' has no non-missing values to compute a mean from")]
    InvalidColumn(String),

    /// Anything else.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
