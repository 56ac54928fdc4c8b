//! src/extractors/mod.rs
use crate::error::ExtractError;
use crate::row::{Emission, Row, Scan};

/// Derives zero or more (group-key, increment) emissions from one row.
///
/// Implementations are pure: the same row always yields the same emissions.
/// Counter bookkeeping belongs to the pipeline, not the policy — a policy
/// signals failure through `ExtractError` and never touches counters.
pub trait RowExtractor: Send + Sync {
    fn extract(&self, row: &Row) -> Result<Vec<Emission>, ExtractError>;

    /// Which columns the store should materialize for this policy. Purely an
    /// efficiency hint; the default asks for everything.
    fn scan(&self) -> Scan {
        Scan::new()
    }
}

mod row_prefix;
mod word_match;

pub use row_prefix::{KeyCase, RowPrefix};
pub use word_match::WordMatch;
