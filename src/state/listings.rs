#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use std::collections::HashSet;

use listings::{PropertyRecord, RecordError};

/// Catalog document embedded at build time.
pub const CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

/// A catalog entry that did not make it into the list.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedRecord {
    /// Zero-based position in the source sequence.
    pub position: usize,
    pub error: RecordError,
}

/// Ordered property records shown by the list, plus what was skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingsState {
    pub items: Vec<PropertyRecord>,
    pub rejected: Vec<RejectedRecord>,
}

impl ListingsState {
    /// Build from already-valid records, keeping their order.
    pub fn from_records(records: impl IntoIterator<Item = PropertyRecord>) -> Self {
        Self::from_results(records.into_iter().map(Ok))
    }

    /// Build from record construction results.
    ///
    /// Failures and repeated ids are recorded in `rejected` and skipped; the
    /// remaining records keep source order.
    pub fn from_results(
        results: impl IntoIterator<Item = Result<PropertyRecord, RecordError>>,
    ) -> Self {
        let mut state = Self::default();
        let mut seen = HashSet::new();

        for (position, result) in results.into_iter().enumerate() {
            let outcome = result.and_then(|record| {
                if seen.insert(record.id()) {
                    Ok(record)
                } else {
                    Err(RecordError::DuplicateId { id: record.id() })
                }
            });
            match outcome {
                Ok(record) => state.items.push(record),
                Err(error) => {
                    log::warn!("skipping catalog entry {position}: {error}");
                    state.rejected.push(RejectedRecord { position, error });
                }
            }
        }

        state
    }

    /// Decode a catalog document. An undecodable document yields an empty list.
    pub fn from_catalog_json(json: &str) -> Self {
        match listings::decode_catalog(json) {
            Ok(results) => {
                let state = Self::from_results(results);
                log::info!(
                    "loaded {} property records ({} rejected)",
                    state.items.len(),
                    state.rejected.len()
                );
                state
            }
            Err(e) => {
                log::error!("{e}");
                Self::default()
            }
        }
    }

    /// State for the embedded catalog.
    pub fn load() -> Self {
        Self::from_catalog_json(CATALOG_JSON)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
