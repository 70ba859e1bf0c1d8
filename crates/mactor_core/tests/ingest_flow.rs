use mactor_core::{
    ActorKind, AnalysisService, Collection, IngestReceipt, MemorySheetStore, RecordValidationError,
};

const SHEET: &str = "Mactor_FAST_Turismo";

fn draft(actor: &str, objective: &str, influence: i64) -> mactor_core::RecordDraft {
    mactor_core::RecordDraft {
        actor: actor.to_string(),
        objective: objective.to_string(),
        influence,
        kind: ActorKind::Factor,
        latitude: 10.0,
        longitude: -74.0,
    }
}

#[test]
fn ingest_appends_one_record_and_persists_full_collection() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    let mut collection = Collection::new();

    let receipt = service
        .ingest(&mut collection, &draft("ONG", "Influir en política", 1))
        .unwrap();
    assert!(receipt.is_persisted());

    assert_eq!(collection.len(), 1);
    let record = &collection.records()[0];
    assert_eq!(record.actor, "ONG");
    assert_eq!(record.objective, "Influir en política");
    assert_eq!(record.influence, 1);
    assert_eq!(record.kind, ActorKind::Factor);

    // Header plus one data row reached the store.
    let rows = service.store().rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], Collection::header());
    assert_eq!(rows[1][0], "ONG");
}

#[test]
fn ingest_grows_collection_by_exactly_one_with_record_last() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    let mut collection = Collection::new();

    service
        .ingest(&mut collection, &draft("Alcaldía", "Turismo sostenible", 0))
        .unwrap();
    let len_before = collection.len();

    service
        .ingest(&mut collection, &draft("ONG", "Influir en política", -1))
        .unwrap();

    assert_eq!(collection.len(), len_before + 1);
    let last = collection.records().last().unwrap();
    assert_eq!(last.actor, "ONG");
    assert_eq!(last.influence, -1);
}

#[test]
fn ingest_rejects_empty_actor_without_mutation_or_save() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    let mut collection = Collection::new();

    let err = service
        .ingest(&mut collection, &draft("", "Influir en política", 1))
        .unwrap_err();

    assert_eq!(err, RecordValidationError::EmptyActor);
    assert!(collection.is_empty());
    assert!(service.store().rows().is_empty());
}

#[test]
fn ingest_rejects_empty_objective_without_mutation_or_save() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    let mut collection = Collection::new();

    let err = service.ingest(&mut collection, &draft("ONG", "", 1)).unwrap_err();

    assert_eq!(err, RecordValidationError::EmptyObjective);
    assert!(collection.is_empty());
    assert!(service.store().rows().is_empty());
}

#[test]
fn ingest_rejects_out_of_domain_influence() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    let mut collection = Collection::new();

    let err = service
        .ingest(&mut collection, &draft("ONG", "Influir en política", 2))
        .unwrap_err();

    assert_eq!(err, RecordValidationError::InfluenceOutOfDomain(2));
    assert!(collection.is_empty());
    assert!(service.store().rows().is_empty());
}

#[test]
fn save_failure_is_non_fatal_and_keeps_in_memory_record() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    let mut collection = Collection::new();

    service.store().set_offline(true);
    let receipt = service
        .ingest(&mut collection, &draft("ONG", "Influir en política", 1))
        .unwrap();

    assert!(matches!(receipt, IngestReceipt::SaveFailed(_)));
    // In-memory state diverges from the store until the next save.
    assert_eq!(collection.len(), 1);
    assert!(service.store().rows().is_empty());
}

#[test]
fn load_or_empty_falls_back_when_store_unreachable() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    service.store().set_offline(true);

    let collection = service.load_or_empty();
    assert!(collection.is_empty());
    assert_eq!(Collection::header().len(), mactor_core::COLUMNS.len());
}

#[test]
fn load_or_empty_returns_persisted_data_when_reachable() {
    let service = AnalysisService::new(MemorySheetStore::new(SHEET));
    let mut collection = Collection::new();
    service
        .ingest(&mut collection, &draft("ONG", "Influir en política", 1))
        .unwrap();

    let reloaded = service.load_or_empty();
    assert_eq!(reloaded, collection);
}
