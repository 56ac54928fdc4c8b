//! src/row.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One addressable record in a table: a unique row key plus cell values
/// organized by (column family, qualifier).
///
/// Rows are immutable snapshots as far as the pipeline is concerned; the
/// store hands one out per scan and the extractor consumes it once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    key: String,
    cells: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

impl Row {
    pub fn new(key: &str) -> Self {
        Row {
            key: key.to_string(),
            cells: BTreeMap::new(),
        }
    }

    pub fn with_cell(mut self, family: &str, qualifier: &str, value: impl Into<Vec<u8>>) -> Self {
        self.set(family, qualifier, value);
        self
    }

    pub fn set(&mut self, family: &str, qualifier: &str, value: impl Into<Vec<u8>>) {
        self.cells
            .entry(family.to_string())
            .or_default()
            .insert(qualifier.to_string(), value.into());
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self, family: &str, qualifier: &str) -> Option<&[u8]> {
        self.cells
            .get(family)
            .and_then(|qualifiers| qualifiers.get(qualifier))
            .map(Vec::as_slice)
    }

    /// Drops every family the scan does not ask for. An unrestricted scan
    /// keeps the row as-is.
    pub fn project(mut self, scan: &Scan) -> Self {
        if !scan.is_unrestricted() {
            self.cells
                .retain(|family, _| scan.families().iter().any(|f| f == family));
        }
        self
    }
}

/// Which column families a table scan should materialize. Restricting the
/// scan is an efficiency measure only; correctness never depends on it.
#[derive(Clone, Debug, Default)]
pub struct Scan {
    families: Vec<String>,
}

impl Scan {
    pub fn new() -> Self {
        Scan::default()
    }

    pub fn add_family(mut self, family: &str) -> Self {
        self.families.push(family.to_string());
        self
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn is_unrestricted(&self) -> bool {
        self.families.is_empty()
    }
}

/// A (group-key, increment) pair produced while processing one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emission {
    pub key: String,
    pub increment: u64,
}

impl Emission {
    pub fn new(key: impl Into<String>, increment: u64) -> Self {
        Emission {
            key: key.into(),
            increment,
        }
    }
}

/// One keyed cell update targeting a destination table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowUpdate {
    row_key: String,
    family: String,
    qualifier: String,
    value: Vec<u8>,
}

impl RowUpdate {
    pub fn new(row_key: &str, family: &str, qualifier: &str, value: impl Into<Vec<u8>>) -> Self {
        RowUpdate {
            row_key: row_key.to_string(),
            family: family.to_string(),
            qualifier: qualifier.to_string(),
            value: value.into(),
        }
    }

    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}
