//! src/error.rs

/// Why deriving emissions from a single row failed. Contained per row: the
/// pipeline counts the row as an error and moves on.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("row {row_key:?} has no {family}:{qualifier} column")]
    MissingColumn {
        row_key: String,
        family: String,
        qualifier: String,
    },
    #[error("column value is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("row key is empty")]
    EmptyRowKey,
}

/// A job-level failure. Configuration problems surface before any row is
/// processed; sink failures abort the run that hit them.
#[derive(thiserror::Error)]
pub enum JobError {
    #[error("invalid job configuration: {0}")]
    Configuration(String),
    #[error("failed to persist an aggregate record")]
    SinkWrite(#[source] anyhow::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for JobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
