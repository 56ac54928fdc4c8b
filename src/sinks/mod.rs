//! src/sinks/mod.rs

/// Persists finalized (key, total) records.
///
/// A write failure is not recoverable by the pipeline; the job that hit it
/// reports failure and whatever retry policy the caller has takes over.
pub trait ResultSink {
    fn write(&mut self, key: &str, total: u64) -> Result<(), anyhow::Error>;

    /// Called once after the last record.
    fn flush(&mut self) -> Result<(), anyhow::Error> {
        Ok(())
    }
}

mod table;
mod text_file;

pub use table::{TableSink, COUNT_FAMILY, COUNT_QUALIFIER};
pub use text_file::TextFileSink;
