//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the ingest/load use cases.
//! - Keep rendering layers decoupled from storage details.

pub mod analysis_service;
