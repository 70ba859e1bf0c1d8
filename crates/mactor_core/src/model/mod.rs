//! Domain model for MACTOR/FAST stakeholder observations.
//!
//! # Responsibility
//! - Define the canonical record and collection shapes used by core logic.
//! - Keep validity rules next to the data they protect.
//!
//! # Invariants
//! - Malformed records never enter a [`collection::Collection`].
//! - The declared column schema is the only tabular shape core code emits.

pub mod collection;
pub mod record;
