//! Chart aggregations: grouped influence bars and the FAST scatter.

use crate::model::collection::Collection;
use crate::model::record::ActorKind;
use serde::Serialize;

/// One bar of the grouped influence chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluenceBar {
    pub objective: String,
    pub actor: String,
    /// Bar height; negative bars render below the axis.
    pub influence: i64,
}

/// One point of the FAST positioning scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub actor: String,
    pub influence: i64,
    #[serde(rename = "type")]
    pub kind: ActorKind,
}

/// Groups records by objective and emits one bar per record.
///
/// Objectives appear in first-seen order; bars inside a group keep
/// arrival order. A repeated (objective, actor) pair yields repeated
/// bars rather than being merged.
pub fn influence_bars(collection: &Collection) -> Vec<InfluenceBar> {
    let mut objectives: Vec<&str> = Vec::new();
    for record in collection.records() {
        if !objectives.contains(&record.objective.as_str()) {
            objectives.push(record.objective.as_str());
        }
    }

    let mut bars = Vec::with_capacity(collection.len());
    for objective in objectives {
        for record in collection
            .records()
            .iter()
            .filter(|record| record.objective == objective)
        {
            bars.push(InfluenceBar {
                objective: record.objective.clone(),
                actor: record.actor.clone(),
                influence: record.influence,
            });
        }
    }
    bars
}

/// Projects every record to one scatter point, no aggregation or dedup.
pub fn scatter_points(collection: &Collection) -> Vec<ScatterPoint> {
    collection
        .records()
        .iter()
        .map(|record| ScatterPoint {
            actor: record.actor.clone(),
            influence: record.influence,
            kind: record.kind.clone(),
        })
        .collect()
}
