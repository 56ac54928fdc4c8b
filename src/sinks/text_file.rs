//! src/sinks/text_file.rs
use crate::sinks::ResultSink;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one `key<TAB>total` line per record to a single output file.
///
/// Records arrive from the reducer in ascending key order, so a single sink
/// instance produces a totally ordered output file.
pub struct TextFileSink {
    writer: BufWriter<File>,
}

impl TextFileSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(TextFileSink {
            writer: BufWriter::new(file),
        })
    }
}

impl ResultSink for TextFileSink {
    fn write(&mut self, key: &str, total: u64) -> Result<(), anyhow::Error> {
        writeln!(self.writer, "{key}\t{total}").context("Failed to write output line")
    }

    fn flush(&mut self) -> Result<(), anyhow::Error> {
        self.writer.flush().context("Failed to flush output file")
    }
}
