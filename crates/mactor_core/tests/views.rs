use mactor_core::{
    centroid, classify, influence_bars, map_view, markers, scatter_points, ActorKind,
    AnalysisService, Collection, MarkerColor, MemorySheetStore, Record, RecordDraft,
};

fn record(actor: &str, objective: &str, influence: i64, kind: ActorKind) -> Record {
    Record::new(actor, objective, influence, kind, 0.0, 0.0).unwrap()
}

#[test]
fn bars_group_by_objective_in_first_seen_order() {
    let collection = Collection::from_records(vec![
        record("A1", "Obj B", 1, ActorKind::Factor),
        record("A2", "Obj A", -1, ActorKind::Attractor),
        record("A3", "Obj B", 0, ActorKind::SupportSystem),
    ])
    .unwrap();

    let bars = influence_bars(&collection);
    assert_eq!(bars.len(), 3);

    // "Obj B" was seen first, so its bars come first and stay contiguous.
    assert_eq!(bars[0].objective, "Obj B");
    assert_eq!(bars[0].actor, "A1");
    assert_eq!(bars[0].influence, 1);
    assert_eq!(bars[1].objective, "Obj B");
    assert_eq!(bars[1].actor, "A3");
    assert_eq!(bars[1].influence, 0);
    assert_eq!(bars[2].objective, "Obj A");
    assert_eq!(bars[2].actor, "A2");
    assert_eq!(bars[2].influence, -1);
}

#[test]
fn repeated_actor_objective_pairs_are_not_merged() {
    let collection = Collection::from_records(vec![
        record("ONG", "Obj", 1, ActorKind::Factor),
        record("ONG", "Obj", -1, ActorKind::Factor),
    ])
    .unwrap();

    let bars = influence_bars(&collection);
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].influence, 1);
    assert_eq!(bars[1].influence, -1);
}

#[test]
fn scatter_emits_one_point_per_record() {
    let collection = Collection::from_records(vec![
        record("ONG", "Obj A", 1, ActorKind::Factor),
        record("ONG", "Obj B", -1, ActorKind::Attractor),
    ])
    .unwrap();

    let points = scatter_points(&collection);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].actor, "ONG");
    assert_eq!(points[0].influence, 1);
    assert_eq!(points[0].kind, ActorKind::Factor);
    assert_eq!(points[1].actor, "ONG");
    assert_eq!(points[1].kind, ActorKind::Attractor);
}

#[test]
fn marker_colors_follow_fast_classification() {
    let cases = [
        (ActorKind::Factor, MarkerColor::Blue),
        (ActorKind::Attractor, MarkerColor::Green),
        (ActorKind::SupportSystem, MarkerColor::Red),
        (ActorKind::Other("Unknown".to_string()), MarkerColor::Red),
    ];

    for (kind, expected) in cases {
        assert_eq!(classify(&kind), expected, "kind {kind:?}");
    }

    assert_eq!(MarkerColor::Blue.name(), "blue");
    assert_eq!(MarkerColor::Green.name(), "green");
    assert_eq!(MarkerColor::Red.name(), "red");
}

#[test]
fn centroid_is_arithmetic_mean_of_coordinates() {
    let collection = Collection::from_records(vec![
        Record::new("A", "O", 0, ActorKind::Factor, 10.0, -70.0).unwrap(),
        Record::new("B", "O", 0, ActorKind::Factor, 20.0, -80.0).unwrap(),
    ])
    .unwrap();

    let center = centroid(&collection).unwrap();
    assert_eq!(center.latitude, 15.0);
    assert_eq!(center.longitude, -75.0);
}

#[test]
fn centroid_of_empty_collection_is_no_data() {
    let collection = Collection::new();
    assert!(centroid(&collection).is_none());

    let view = map_view(&collection);
    assert!(view.centroid.is_none());
    assert!(view.markers.is_empty());
}

#[test]
fn markers_carry_position_color_and_label() {
    let collection = Collection::from_records(vec![Record::new(
        "ONG",
        "Influir en política",
        1,
        ActorKind::Attractor,
        4.61,
        -74.08,
    )
    .unwrap()])
    .unwrap();

    let placed = markers(&collection);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].latitude, 4.61);
    assert_eq!(placed[0].longitude, -74.08);
    assert_eq!(placed[0].color, MarkerColor::Green);
    assert_eq!(placed[0].label, "ONG - Influir en política (Attractor)");
}

#[test]
fn view_outputs_serialize_for_the_rendering_boundary() {
    let collection = Collection::from_records(vec![record("ONG", "Obj", 1, ActorKind::Factor)])
        .unwrap();

    let json = serde_json::to_value(map_view(&collection)).unwrap();
    assert_eq!(json["markers"][0]["color"], "blue");
    assert_eq!(json["centroid"]["latitude"], 0.0);

    let bars = serde_json::to_value(influence_bars(&collection)).unwrap();
    assert_eq!(bars[0]["objective"], "Obj");

    let points = serde_json::to_value(scatter_points(&collection)).unwrap();
    assert_eq!(points[0]["type"], "Factor");
}

#[test]
fn end_to_end_single_record_scenario() {
    let service = AnalysisService::new(MemorySheetStore::new("Mactor_FAST_Turismo"));
    let mut collection = Collection::new();

    service
        .ingest(
            &mut collection,
            &RecordDraft {
                actor: "ONG".to_string(),
                objective: "Influir en política".to_string(),
                influence: 1,
                kind: ActorKind::Factor,
                latitude: 10.0,
                longitude: -74.0,
            },
        )
        .unwrap();

    let bars = influence_bars(&collection);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].objective, "Influir en política");
    assert_eq!(bars[0].actor, "ONG");
    assert_eq!(bars[0].influence, 1);

    let view = map_view(&collection);
    assert_eq!(view.markers.len(), 1);
    assert_eq!(view.markers[0].color, MarkerColor::Blue);
    assert_eq!(view.markers[0].latitude, 10.0);
    assert_eq!(view.markers[0].longitude, -74.0);
    assert_eq!(view.markers[0].label, "ONG - Influir en política (Factor)");

    let center = view.centroid.unwrap();
    assert_eq!(center.latitude, 10.0);
    assert_eq!(center.longitude, -74.0);
}
