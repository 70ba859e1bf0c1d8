//! Stakeholder observation domain model.
//!
//! # Responsibility
//! - Define the canonical record captured per actor/objective observation.
//! - Enforce validity rules before any record reaches a collection or store.
//!
//! # Invariants
//! - `actor` and `objective` are non-empty for every persistable record.
//! - `influence` stays inside the MACTOR scoring domain {-1, 0, 1}.
//! - Deserialization never yields a record that fails `validate()`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest legal influence score (opposition).
pub const INFLUENCE_MIN: i64 = -1;
/// Highest legal influence score (support).
pub const INFLUENCE_MAX: i64 = 1;

/// FAST classification for an observed actor.
///
/// The store column holding this value is free text written by external
/// tools, so unrecognized labels are carried through as [`ActorKind::Other`]
/// instead of being rejected at the load boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActorKind {
    /// Structural driver of the analyzed system.
    Factor,
    /// Pole the system gravitates toward.
    Attractor,
    /// Enabling support infrastructure.
    SupportSystem,
    /// Unrecognized classification text persisted by an external writer.
    Other(String),
}

impl ActorKind {
    /// Returns the stored/displayed label for this classification.
    pub fn label(&self) -> &str {
        match self {
            Self::Factor => "Factor",
            Self::Attractor => "Attractor",
            Self::SupportSystem => "SupportSystem",
            Self::Other(text) => text.as_str(),
        }
    }
}

impl Display for ActorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ActorKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Factor" => Self::Factor,
            "Attractor" => Self::Attractor,
            "SupportSystem" => Self::SupportSystem,
            _ => Self::Other(value),
        }
    }
}

impl From<ActorKind> for String {
    fn from(value: ActorKind) -> Self {
        match value {
            ActorKind::Other(text) => text,
            recognized => recognized.label().to_string(),
        }
    }
}

/// Validity failure for a candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyActor,
    EmptyObjective,
    InfluenceOutOfDomain(i64),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyActor => write!(f, "actor must not be empty"),
            Self::EmptyObjective => write!(f, "objective must not be empty"),
            Self::InfluenceOutOfDomain(value) => write!(
                f,
                "influence {value} is outside the domain {INFLUENCE_MIN}..={INFLUENCE_MAX}"
            ),
        }
    }
}

impl Error for RecordValidationError {}

/// One actor/objective observation with influence score, FAST
/// classification and geocoordinates.
///
/// Records are keyless by design: the collection preserves arrival order
/// and never deduplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    /// Stakeholder name.
    pub actor: String,
    /// Strategic objective the actor bears on.
    pub objective: String,
    /// Scored influence: -1 opposition, 0 neutral, 1 support.
    pub influence: i64,
    /// Serialized as `type` to match the external column name.
    #[serde(rename = "type")]
    pub kind: ActorKind,
    pub latitude: f64,
    pub longitude: f64,
}

/// Unvalidated wire shape; promoted to [`Record`] through validation.
#[derive(Deserialize)]
struct RawRecord {
    actor: String,
    objective: String,
    influence: i64,
    #[serde(rename = "type")]
    kind: ActorKind,
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawRecord> for Record {
    type Error = RecordValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Record::new(
            raw.actor,
            raw.objective,
            raw.influence,
            raw.kind,
            raw.latitude,
            raw.longitude,
        )
    }
}

impl Record {
    /// Creates a validated record.
    ///
    /// # Errors
    /// - [`RecordValidationError::EmptyActor`] / [`RecordValidationError::EmptyObjective`]
    ///   when the respective text is empty.
    /// - [`RecordValidationError::InfluenceOutOfDomain`] when `influence`
    ///   falls outside {-1, 0, 1}.
    pub fn new(
        actor: impl Into<String>,
        objective: impl Into<String>,
        influence: i64,
        kind: ActorKind,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            actor: actor.into(),
            objective: objective.into(),
            influence,
            kind,
            latitude,
            longitude,
        };
        record.validate()?;
        Ok(record)
    }

    /// Re-checks the persistability invariant on the current field values.
    ///
    /// Fields are public, so every write path (append, store load, save)
    /// must call this before trusting a record.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.actor.is_empty() {
            return Err(RecordValidationError::EmptyActor);
        }
        if self.objective.is_empty() {
            return Err(RecordValidationError::EmptyObjective);
        }
        if !(INFLUENCE_MIN..=INFLUENCE_MAX).contains(&self.influence) {
            return Err(RecordValidationError::InfluenceOutOfDomain(self.influence));
        }
        Ok(())
    }
}
