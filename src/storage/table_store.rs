//! src/storage/table_store.rs
use crate::row::{Row, RowUpdate, Scan};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// File-backed row store: one directory per store, one JSON-lines file per
/// table, one serialized `Row` per line.
///
/// Stands in for the distributed table store the pipeline treats as an
/// external collaborator; the pipeline itself only ever sees `Row` values
/// and `RowUpdate`s.
#[derive(Clone, Debug)]
pub struct TableStore {
    root: PathBuf,
}

impl TableStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, anyhow::Error> {
        let root = root.into();
        std::fs::create_dir_all(&root).with_context(|| {
            format!("Failed to create table store root {}", root.display())
        })?;
        Ok(TableStore { root })
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.jsonl"))
    }

    pub fn table_exists(&self, table: &str) -> bool {
        self.table_path(table).is_file()
    }

    #[tracing::instrument(name = "Create table", skip(self))]
    pub fn create_table(&self, table: &str) -> Result<(), anyhow::Error> {
        let path = self.table_path(table);
        if !path.is_file() {
            File::create(&path)
                .with_context(|| format!("Failed to create table file for {table}"))?;
        }
        Ok(())
    }

    /// Loads every row of the table, restricted to the scan's column
    /// families.
    #[tracing::instrument(name = "Scan table", skip(self, scan))]
    pub fn scan(&self, table: &str, scan: &Scan) -> Result<Vec<Row>, anyhow::Error> {
        let path = self.table_path(table);
        let file =
            File::open(&path).with_context(|| format!("Failed to open table {table}"))?;
        let mut rows = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.context("Failed to read row line")?;
            if line.trim().is_empty() {
                continue;
            }
            let row: Row =
                serde_json::from_str(&line).context("Failed to decode stored row")?;
            rows.push(row.project(scan));
        }
        tracing::debug!(table, rows = rows.len(), "scan complete");
        Ok(rows)
    }

    /// Replaces the table's contents with the given rows, creating the table
    /// if needed.
    #[tracing::instrument(name = "Put rows", skip(self, rows), fields(rows = rows.len()))]
    pub fn put_rows(&self, table: &str, rows: &[Row]) -> Result<(), anyhow::Error> {
        let path = self.table_path(table);
        let file =
            File::create(&path).with_context(|| format!("Failed to write table {table}"))?;
        let mut writer = BufWriter::new(file);
        for row in rows {
            let line = serde_json::to_string(row).context("Failed to encode row")?;
            writeln!(writer, "{line}").context("Failed to write row line")?;
        }
        writer.flush().context("Failed to flush table file")
    }

    /// Applies one cell update to the destination row, creating the row if
    /// the key is new. The table itself must already exist.
    #[tracing::instrument(name = "Apply update", skip(self, update), fields(row_key = update.row_key()))]
    pub fn apply(&self, table: &str, update: RowUpdate) -> Result<(), anyhow::Error> {
        if !self.table_exists(table) {
            anyhow::bail!("destination table {table} does not exist");
        }
        let mut rows = self.scan(table, &Scan::new())?;
        match rows.iter_mut().find(|row| row.key() == update.row_key()) {
            Some(row) => row.set(update.family(), update.qualifier(), update.value().to_vec()),
            None => rows.push(
                Row::new(update.row_key()).with_cell(
                    update.family(),
                    update.qualifier(),
                    update.value().to_vec(),
                ),
            ),
        }
        self.put_rows(table, &rows)
    }
}
