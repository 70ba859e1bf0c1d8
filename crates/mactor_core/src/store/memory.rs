//! In-memory sheet store fake.
//!
//! # Responsibility
//! - Substitute the SQLite store in tests and embedding hosts without I/O.
//! - Simulate store unavailability through an `offline` switch.
//!
//! # Invariants
//! - While offline, every operation fails with `StoreError::Unavailable`
//!   and leaves the stored rows untouched.

use super::{StoreError, StoreResult, TabularStore};
use std::cell::{Cell, RefCell};

/// Sheet store backed by a plain row vector.
///
/// Interior mutability keeps the trait surface `&self`, matching the
/// connection-backed implementation. Single-threaded by design, like the
/// rest of the core.
pub struct MemorySheetStore {
    sheet: String,
    rows: RefCell<Vec<Vec<String>>>,
    offline: Cell<bool>,
}

impl MemorySheetStore {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            rows: RefCell::new(Vec::new()),
            offline: Cell::new(false),
        }
    }

    /// Toggles simulated connectivity loss.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Snapshot of the stored rows, for assertions.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.borrow().clone()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.get() {
            return Err(StoreError::Unavailable {
                reason: format!("sheet `{}` is offline", self.sheet),
            });
        }
        Ok(())
    }
}

impl TabularStore for MemorySheetStore {
    fn sheet_name(&self) -> &str {
        &self.sheet
    }

    fn read_all(&self) -> StoreResult<Vec<Vec<String>>> {
        self.check_online()?;
        Ok(self.rows())
    }

    fn clear(&self) -> StoreResult<()> {
        self.check_online()?;
        self.rows.borrow_mut().clear();
        Ok(())
    }

    fn write_rows(&self, rows: &[Vec<String>]) -> StoreResult<()> {
        self.check_online()?;
        self.rows.borrow_mut().extend(rows.iter().cloned());
        Ok(())
    }
}
