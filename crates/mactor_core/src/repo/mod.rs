//! Store adapter layer between collections and the tabular store.
//!
//! # Responsibility
//! - Map the typed record collection onto raw sheet rows and back.
//! - Keep cell-format details out of the service/business orchestration.
//!
//! # Invariants
//! - Load paths reject invalid persisted state instead of masking it.
//! - Save is a full overwrite in collection order; there is no
//!   incremental update.

pub mod record_repo;
