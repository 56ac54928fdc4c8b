//! src/extractors/row_prefix.rs
use crate::error::ExtractError;
use crate::extractors::RowExtractor;
use crate::row::{Emission, Row};
use std::sync::Arc;

/// Case handling for derived prefix keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyCase {
    #[default]
    Preserve,
    Upper,
}

/// Groups every row under the first character of its row key, one emission
/// per row. A row with an empty key cannot be grouped and counts as an
/// error.
pub struct RowPrefix {
    case: KeyCase,
}

impl RowPrefix {
    pub fn new(case: KeyCase) -> Self {
        RowPrefix { case }
    }
}

impl RowExtractor for RowPrefix {
    fn extract(&self, row: &Row) -> Result<Vec<Emission>, ExtractError> {
        let first = row.key().chars().next().ok_or(ExtractError::EmptyRowKey)?;
        let key = match self.case {
            KeyCase::Preserve => first.to_string(),
            KeyCase::Upper => first.to_uppercase().collect(),
        };
        Ok(vec![Emission::new(key, 1)])
    }
}

crate::register_extractor!("key-prefix", || Arc::new(RowPrefix::new(KeyCase::Preserve)));
