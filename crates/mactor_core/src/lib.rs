//! Core domain logic for MACTOR/FAST stakeholder-influence analysis.
//! This crate is the single source of truth for business invariants;
//! form widgets, chart rendering and map tiles live outside and only
//! consume its outputs.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collection::{Collection, COLUMNS};
pub use model::record::{
    ActorKind, Record, RecordValidationError, INFLUENCE_MAX, INFLUENCE_MIN,
};
pub use repo::record_repo::{RepoError, RepoResult, SheetRepository};
pub use service::analysis_service::{AnalysisService, IngestReceipt, RecordDraft};
pub use store::{
    open_sheet_db, open_sheet_db_in_memory, MemorySheetStore, SqliteSheetStore, StoreError,
    StoreResult, TabularStore,
};
pub use view::charts::{influence_bars, scatter_points, InfluenceBar, ScatterPoint};
pub use view::map::{centroid, classify, map_view, markers, Centroid, MapView, Marker, MarkerColor};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
