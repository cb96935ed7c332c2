//! Property record model and catalog codec for the listings UI.
//!
//! This crate owns the validated [`PropertyRecord`] and the JSON wire shape
//! (`{"Id":1,"Name":"..","Type":"..","Price":12000}`) used by the embedded
//! catalog document. Decoding always goes through the same validation as
//! construction in code, so an invalid record can never exist as a value.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single rule a record broke during construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// Ids are non-negative.
    NegativeId(i64),
    /// Name is empty or whitespace only.
    EmptyName,
    /// Prices are non-negative.
    NegativePrice(f64),
    /// Price is NaN or infinite.
    NonFinitePrice,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeId(id) => write!(f, "id {id} is negative"),
            Self::EmptyName => f.write_str("name is empty"),
            Self::NegativePrice(price) => write!(f, "price {price} is negative"),
            Self::NonFinitePrice => f.write_str("price is not a finite number"),
        }
    }
}

/// Error returned when a record cannot join a listing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// One or more field rules failed. All failures are reported together.
    #[error("invalid property record: {}", describe(.violations))]
    Invalid { violations: Vec<Violation> },
    /// The catalog entry does not have the record shape (missing field, wrong type).
    #[error("malformed property record: {0}")]
    Malformed(String),
    /// Another record in the same list already uses this id.
    #[error("duplicate property id {id}")]
    DuplicateId { id: u64 },
}

impl RecordError {
    /// Violations carried by an [`RecordError::Invalid`] error, empty otherwise.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid { violations } => violations,
            Self::Malformed(_) | Self::DuplicateId { .. } => &[],
        }
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned by [`decode_catalog`] when the document itself is unusable.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not a JSON array.
    #[error("failed to decode catalog document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Unvalidated record exactly as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPropertyRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub price: f64,
}

/// A validated, read-only property listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "RawPropertyRecord")]
pub struct PropertyRecord {
    id: u64,
    name: String,
    #[serde(rename = "Type")]
    kind: String,
    price: f64,
}

impl PropertyRecord {
    /// Validate and build a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Invalid`] listing every broken rule: negative
    /// id, blank name, negative or non-finite price.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        kind: impl Into<String>,
        price: f64,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        let mut violations = Vec::new();

        let checked_id = u64::try_from(id);
        if checked_id.is_err() {
            violations.push(Violation::NegativeId(id));
        }
        if name.trim().is_empty() {
            violations.push(Violation::EmptyName);
        }
        if !price.is_finite() {
            violations.push(Violation::NonFinitePrice);
        } else if price < 0.0 {
            violations.push(Violation::NegativePrice(price));
        }

        match checked_id {
            Ok(id) if violations.is_empty() => Ok(Self { id, name, kind: kind.into(), price }),
            _ => Err(RecordError::Invalid { violations }),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text category, serialized as `Type`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl TryFrom<RawPropertyRecord> for PropertyRecord {
    type Error = RecordError;

    fn try_from(raw: RawPropertyRecord) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name, raw.kind, raw.price)
    }
}

/// Decode a catalog document into per-entry record results.
///
/// The document must be a JSON array. Each element is decoded and validated
/// on its own so one bad entry never hides the rest; entry order is kept.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if the document is not a JSON array.
pub fn decode_catalog(json: &str) -> Result<Vec<Result<PropertyRecord, RecordError>>, CatalogError> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(decode_entry).collect())
}

fn decode_entry(entry: Value) -> Result<PropertyRecord, RecordError> {
    let raw: RawPropertyRecord =
        serde_json::from_value(entry).map_err(|e| RecordError::Malformed(e.to_string()))?;
    PropertyRecord::try_from(raw)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
