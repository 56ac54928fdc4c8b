//! src/extractors/word_match.rs
use crate::error::ExtractError;
use crate::extractors::RowExtractor;
use crate::row::{Emission, Row, Scan};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Tokenizes a designated text column and counts exact matches against a
/// fixed set of target words. Tokens outside the set are ignored, not
/// errors.
pub struct WordMatch {
    family: String,
    qualifier: String,
    targets: BTreeSet<String>,
}

impl WordMatch {
    /// Target words are matched case-insensitively: both the targets and the
    /// row's tokens are uppercased before comparison.
    pub fn new<I, S>(family: &str, qualifier: &str, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordMatch {
            family: family.to_string(),
            qualifier: qualifier.to_string(),
            targets: targets
                .into_iter()
                .map(|word| word.into().to_uppercase())
                .collect(),
        }
    }

    /// Counts the German definite articles in the `text:` column.
    pub fn german_articles() -> Self {
        WordMatch::new("text", "", ["DER", "DIE", "DAS"])
    }
}

impl RowExtractor for WordMatch {
    fn extract(&self, row: &Row) -> Result<Vec<Emission>, ExtractError> {
        let bytes = row
            .value(&self.family, &self.qualifier)
            .ok_or_else(|| ExtractError::MissingColumn {
                row_key: row.key().to_string(),
                family: self.family.clone(),
                qualifier: self.qualifier.clone(),
            })?;
        let text = std::str::from_utf8(bytes)?;

        let mut emissions = Vec::new();
        for token in text.split_whitespace() {
            let token = token.to_uppercase();
            if self.targets.contains(&token) {
                emissions.push(Emission::new(token, 1));
            }
        }
        Ok(emissions)
    }

    fn scan(&self) -> Scan {
        Scan::new().add_family(&self.family)
    }
}

crate::register_extractor!("word-match", || Arc::new(WordMatch::german_articles()));
