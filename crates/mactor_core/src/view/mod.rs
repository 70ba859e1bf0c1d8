//! Pure derived-view computations.
//!
//! # Responsibility
//! - Turn a collection into chart-ready and map-ready data.
//! - Stay side-effect free; rendering happens outside the core.
//!
//! # Invariants
//! - View generators never mutate the collection.
//! - Output order is deterministic for a given collection order.

pub mod charts;
pub mod map;
