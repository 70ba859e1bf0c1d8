//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mactor_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use mactor_core::{
    influence_bars, map_view, ActorKind, AnalysisService, MemorySheetStore, RecordDraft,
};

fn main() {
    println!("mactor_core version={}", mactor_core::core_version());

    // In-memory probe of the full ingest -> view pipeline.
    let service = AnalysisService::new(MemorySheetStore::new("smoke"));
    let mut collection = service.load_or_empty();
    let receipt = service.ingest(
        &mut collection,
        &RecordDraft {
            actor: "ONG".to_string(),
            objective: "Influir en política".to_string(),
            influence: 1,
            kind: ActorKind::Factor,
            latitude: 10.0,
            longitude: -74.0,
        },
    );

    match receipt {
        Ok(receipt) => {
            let view = map_view(&collection);
            println!(
                "smoke records={} bars={} markers={} persisted={}",
                collection.len(),
                influence_bars(&collection).len(),
                view.markers.len(),
                receipt.is_persisted()
            );
        }
        Err(err) => println!("smoke ingest rejected: {err}"),
    }
}
