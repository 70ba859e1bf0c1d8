//! Ordered record collection and its declared tabular schema.
//!
//! # Responsibility
//! - Hold the single owned in-memory dataset between load and save.
//! - Guarantee that only validated records enter the sequence.
//!
//! # Invariants
//! - Insertion order is preserved; there is no key and no dedup.
//! - Every contained record satisfies `Record::validate()`.

use crate::model::record::{Record, RecordValidationError};
use serde::{Deserialize, Serialize};

/// Fixed column order shared by the collection and the backing store.
pub const COLUMNS: [&str; 6] = [
    "Actor",
    "Objective",
    "Influence",
    "Type",
    "Latitude",
    "Longitude",
];

/// Ordered sequence of validated records; the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    /// Creates an empty collection carrying the declared schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from already-parsed records, re-validating each.
    pub fn from_records(records: Vec<Record>) -> Result<Self, RecordValidationError> {
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    /// Appends one record at the end, arrival order.
    ///
    /// # Errors
    /// Rejects records violating the persistability invariant; the
    /// collection is left unchanged in that case.
    pub fn append(&mut self, record: Record) -> Result<(), RecordValidationError> {
        record.validate()?;
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row matching [`COLUMNS`], in store cell form.
    pub fn header() -> Vec<String> {
        COLUMNS.iter().map(|column| column.to_string()).collect()
    }
}
