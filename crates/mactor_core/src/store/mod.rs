//! Tabular store capability boundary.
//!
//! # Responsibility
//! - Define the row-level contract the core needs from a named sheet.
//! - Provide the SQLite-backed implementation and an in-memory fake.
//!
//! # Invariants
//! - The store holds raw text rows only; record semantics live above it
//!   in the repository layer.
//! - Authentication/connectivity failures surface uniformly as
//!   `StoreError::Unavailable`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemorySheetStore;
pub use sqlite::{open_sheet_db, open_sheet_db_in_memory, SqliteSheetStore};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// The backing store cannot be reached or refused the capability.
    Unavailable { reason: String },
    /// Transport-level SQLite failure on an otherwise reachable store.
    Sqlite(rusqlite::Error),
    /// Connection was not bootstrapped to the schema version this
    /// binary expects.
    UninitializedStore {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "store unavailable: {reason}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UninitializedStore {
                expected_version,
                actual_version,
            } => write!(
                f,
                "store schema version {actual_version} does not match expected {expected_version}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Unavailable { .. } | Self::UninitializedStore { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Capability handle scoped to one named sheet of the external store.
///
/// The interface mirrors what a remote spreadsheet client offers: whole-row
/// reads, wholesale clearing and ordered appends. There is deliberately no
/// incremental update operation.
pub trait TabularStore {
    /// Name of the sheet this capability is scoped to.
    fn sheet_name(&self) -> &str;

    /// Reads every row, header included, in stored order.
    fn read_all(&self) -> StoreResult<Vec<Vec<String>>>;

    /// Deletes every row of the sheet.
    fn clear(&self) -> StoreResult<()>;

    /// Appends rows after the existing content, preserving slice order.
    fn write_rows(&self, rows: &[Vec<String>]) -> StoreResult<()>;
}
