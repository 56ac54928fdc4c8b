//! src/sinks/table.rs
use crate::row::RowUpdate;
use crate::sinks::ResultSink;
use crate::storage::TableStore;
use anyhow::Context;

pub const COUNT_FAMILY: &str = "data";
pub const COUNT_QUALIFIER: &str = "count";

/// Writes each total back into the row store as a `data:count` cell on the
/// row named by the group key.
///
/// Totals are stored as decimal text, not raw binary, so the column stays
/// readable in store dumps. The destination table must already exist; the
/// sink never creates it.
pub struct TableSink {
    store: TableStore,
    table: String,
}

impl TableSink {
    pub fn new(store: TableStore, table: &str) -> Self {
        TableSink {
            store,
            table: table.to_string(),
        }
    }
}

impl ResultSink for TableSink {
    fn write(&mut self, key: &str, total: u64) -> Result<(), anyhow::Error> {
        let update = RowUpdate::new(
            key,
            COUNT_FAMILY,
            COUNT_QUALIFIER,
            total.to_string().into_bytes(),
        );
        self.store
            .apply(&self.table, update)
            .with_context(|| format!("Failed to update count for key {key:?}"))
    }
}
