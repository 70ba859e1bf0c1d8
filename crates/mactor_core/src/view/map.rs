//! Geospatial marker layout: centroid, colors and labels.
//!
//! # Invariants
//! - The centroid of an empty collection is a no-data state, never a
//!   numeric default.
//! - Color classification is exactly three-way: Factor, Attractor,
//!   everything else. `SupportSystem` and unrecognized type text share
//!   the fallback color on purpose; the source method draws them the
//!   same.

use crate::model::collection::Collection;
use crate::model::record::{ActorKind, Record};
use serde::Serialize;

/// Marker tint understood by the map rendering boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Green,
    Red,
}

impl MarkerColor {
    /// Renderer-facing color name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// Classifies a FAST kind into its marker color.
pub fn classify(kind: &ActorKind) -> MarkerColor {
    match kind {
        ActorKind::Factor => MarkerColor::Blue,
        ActorKind::Attractor => MarkerColor::Green,
        _ => MarkerColor::Red,
    }
}

/// One placed map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: MarkerColor,
    /// Popup text: `"{actor} - {objective} ({type})"`.
    pub label: String,
}

/// Mean coordinate used to center the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub latitude: f64,
    pub longitude: f64,
}

/// Map-ready projection of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// `None` signals the no-data state; callers must branch on it
    /// instead of centering on a fabricated coordinate.
    pub centroid: Option<Centroid>,
    pub markers: Vec<Marker>,
}

/// Arithmetic mean of all latitudes and longitudes.
///
/// Undefined (`None`) for an empty collection.
pub fn centroid(collection: &Collection) -> Option<Centroid> {
    if collection.is_empty() {
        return None;
    }

    let count = collection.len() as f64;
    let (lat_sum, long_sum) = collection
        .records()
        .iter()
        .fold((0.0, 0.0), |(lat, long), record| {
            (lat + record.latitude, long + record.longitude)
        });

    Some(Centroid {
        latitude: lat_sum / count,
        longitude: long_sum / count,
    })
}

/// One marker per record, in collection order.
pub fn markers(collection: &Collection) -> Vec<Marker> {
    collection
        .records()
        .iter()
        .map(|record| Marker {
            latitude: record.latitude,
            longitude: record.longitude,
            color: classify(&record.kind),
            label: marker_label(record),
        })
        .collect()
}

/// Builds the full map projection in one pass.
pub fn map_view(collection: &Collection) -> MapView {
    MapView {
        centroid: centroid(collection),
        markers: markers(collection),
    }
}

fn marker_label(record: &Record) -> String {
    format!(
        "{} - {} ({})",
        record.actor, record.objective, record.kind
    )
}
