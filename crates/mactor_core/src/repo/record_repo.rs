//! Record repository over a tabular sheet store.
//!
//! # Responsibility
//! - Load the full collection from the named sheet, validating at the
//!   untyped-data boundary.
//! - Persist the full collection with the clear-then-write contract.
//!
//! # Invariants
//! - The first stored row is always the declared header.
//! - Every loaded record passes `Record::validate()`.

use crate::model::collection::{Collection, COLUMNS};
use crate::model::record::{Record, RecordValidationError};
use crate::store::{StoreError, TabularStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for sheet persistence and row mapping.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Validation(RecordValidationError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted sheet data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Maps collections onto the row contract of a [`TabularStore`].
pub struct SheetRepository<S: TabularStore> {
    store: S,
}

impl<S: TabularStore> SheetRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the whole collection from the sheet.
    ///
    /// An entirely empty sheet yields an empty collection. A non-empty
    /// sheet must start with the declared header row.
    ///
    /// # Errors
    /// - `RepoError::Store` when the sheet cannot be read.
    /// - `RepoError::InvalidData` for header mismatches, short rows and
    ///   unparseable cells.
    /// - `RepoError::Validation` when a stored record violates the
    ///   persistability invariant.
    pub fn load(&self) -> RepoResult<Collection> {
        let rows = self.store.read_all()?;
        if rows.is_empty() {
            info!("event=sheet_load module=repo status=ok rows=0");
            return Ok(Collection::new());
        }

        let header = &rows[0];
        if !header.iter().map(String::as_str).eq(COLUMNS) {
            return Err(RepoError::InvalidData(format!(
                "unexpected header row {header:?} in sheet `{}`",
                self.store.sheet_name()
            )));
        }

        let mut records = Vec::with_capacity(rows.len() - 1);
        for (offset, row) in rows[1..].iter().enumerate() {
            records.push(parse_row(offset + 1, row)?);
        }

        let collection = Collection::from_records(records)?;
        info!(
            "event=sheet_load module=repo status=ok rows={}",
            collection.len()
        );
        Ok(collection)
    }

    /// Overwrites the sheet with the header row plus all records in
    /// collection order.
    ///
    /// # Hazard
    /// Clear-then-write is not atomic: a failure after `clear` succeeds
    /// leaves the sheet empty while the in-memory collection survives.
    /// This matches the external store's contract, which offers no
    /// transaction; callers treat save failures as non-fatal warnings.
    pub fn save(&self, collection: &Collection) -> RepoResult<()> {
        let mut rows = Vec::with_capacity(collection.len() + 1);
        rows.push(Collection::header());
        for record in collection.records() {
            record.validate()?;
            rows.push(record_to_row(record));
        }

        self.store.clear()?;
        self.store.write_rows(&rows)?;
        info!(
            "event=sheet_save module=repo status=ok rows={}",
            collection.len()
        );
        Ok(())
    }
}

fn record_to_row(record: &Record) -> Vec<String> {
    vec![
        record.actor.clone(),
        record.objective.clone(),
        record.influence.to_string(),
        record.kind.label().to_string(),
        record.latitude.to_string(),
        record.longitude.to_string(),
    ]
}

fn parse_row(row_index: usize, row: &[String]) -> RepoResult<Record> {
    if row.len() != COLUMNS.len() {
        return Err(RepoError::InvalidData(format!(
            "row {row_index} has {} cells, expected {}",
            row.len(),
            COLUMNS.len()
        )));
    }

    let influence = row[2].parse::<i64>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid influence value `{}` in row {row_index}",
            row[2]
        ))
    })?;
    let latitude = parse_coordinate(row_index, "Latitude", &row[4])?;
    let longitude = parse_coordinate(row_index, "Longitude", &row[5])?;

    let record = Record::new(
        row[0].clone(),
        row[1].clone(),
        influence,
        row[3].clone().into(),
        latitude,
        longitude,
    )?;
    Ok(record)
}

fn parse_coordinate(row_index: usize, column: &str, cell: &str) -> RepoResult<f64> {
    cell.parse::<f64>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid {column} value `{cell}` in row {row_index}"
        ))
    })
}
