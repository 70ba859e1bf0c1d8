//! Ingestion and load use-cases for the analysis dataset.
//!
//! # Responsibility
//! - Validate candidate observations before they touch the collection.
//! - Persist the full collection after every accepted ingest.
//! - Shield the process from store outages on load.
//!
//! # Invariants
//! - A rejected draft leaves the collection untouched and triggers no save.
//! - Collection mutation happens only through `ingest`.
//! - Save failures are surfaced, never fatal.

use crate::model::collection::Collection;
use crate::model::record::{ActorKind, Record, RecordValidationError};
use crate::repo::record_repo::{RepoError, RepoResult, SheetRepository};
use crate::store::TabularStore;
use log::warn;

/// Candidate observation as entered at the capture boundary.
///
/// Plain unvalidated fields; promotion to a [`Record`] happens inside
/// [`AnalysisService::ingest`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub actor: String,
    pub objective: String,
    pub influence: i64,
    pub kind: ActorKind,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of an accepted ingest.
#[derive(Debug)]
pub enum IngestReceipt {
    /// Record appended and the full collection written to the store.
    Persisted,
    /// Record appended, but the save failed; in-memory state now diverges
    /// from the store until the next successful save.
    SaveFailed(RepoError),
}

impl IngestReceipt {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }
}

/// Use-case service over one sheet-backed dataset.
pub struct AnalysisService<S: TabularStore> {
    repo: SheetRepository<S>,
}

impl<S: TabularStore> AnalysisService<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: SheetRepository::new(store),
        }
    }

    pub fn store(&self) -> &S {
        self.repo.store()
    }

    /// Loads the collection, propagating typed failures.
    pub fn load(&self) -> RepoResult<Collection> {
        self.repo.load()
    }

    /// Loads the collection, falling back to an empty one on any failure.
    ///
    /// The capture/visualization flow must keep working with no data when
    /// the store is unreachable, so every load error degrades to an empty
    /// collection with the declared schema and a warning log.
    pub fn load_or_empty(&self) -> Collection {
        match self.repo.load() {
            Ok(collection) => collection,
            Err(err) => {
                warn!(
                    "event=collection_load module=service status=fallback_empty error={err}"
                );
                Collection::new()
            }
        }
    }

    /// Validates a draft, appends it and saves the full collection.
    ///
    /// # Errors
    /// Returns the validation error for malformed drafts; the collection
    /// is unchanged and no save is attempted.
    ///
    /// A store failure during save is NOT an error here: the record stays
    /// in the collection and the receipt carries the failure, matching the
    /// non-fatal warning contract.
    pub fn ingest(
        &self,
        collection: &mut Collection,
        draft: &RecordDraft,
    ) -> Result<IngestReceipt, RecordValidationError> {
        let record = Record::new(
            draft.actor.clone(),
            draft.objective.clone(),
            draft.influence,
            draft.kind.clone(),
            draft.latitude,
            draft.longitude,
        )?;
        collection.append(record)?;

        match self.repo.save(collection) {
            Ok(()) => Ok(IngestReceipt::Persisted),
            Err(err) => {
                warn!(
                    "event=ingest_save module=service status=error collection_len={} error={err}",
                    collection.len()
                );
                Ok(IngestReceipt::SaveFailed(err))
            }
        }
    }
}
