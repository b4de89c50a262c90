use floorplan_nav::adapters::outbound::FilesystemFloorPlanSource;
use floorplan_nav::common::{DomainError, GridError};
use floorplan_nav::domains::routing::{FloorPlan, FloorPlanSource, GridCell, GridSource};
use std::fs;
use tempfile::tempdir;

const ASCII_PLAN: &str = r#"{
  "image": { "width": 400, "height": 200 },
  "grid": ["....", ".##."],
  "points": [
    { "name": "Door", "x": 10, "y": 10, "category": "entry" },
    { "name": "Lab", "x": 390, "y": 190, "category": "lab" },
    { "name": "Closet", "x": 150, "y": 150, "category": "storage" }
  ]
}"#;

#[test]
fn test_load_ascii_floor_plan() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ascii.json"), ASCII_PLAN).unwrap();
    let source = FilesystemFloorPlanSource::new(Some(dir.path().to_path_buf()));

    let doc = source.load_document("ascii.json").unwrap();
    assert!(matches!(doc.grid, GridSource::Ascii(_)));

    let plan = FloorPlan::from_document(doc).unwrap();
    assert_eq!(plan.grid().dimensions(), (2, 4));
    assert_eq!(plan.catalog().len(), 3);
    assert!(!plan.grid().is_walkable(GridCell::new(1, 1)));
    // Unknown categories fall back to Other.
    assert_eq!(
        plan.catalog().get("Closet").map(|p| p.category),
        Some(floorplan_nav::domains::routing::PoiCategory::Other)
    );
}

#[test]
fn test_load_matrix_floor_plan() {
    let json = r#"{
      "image": { "width": 300, "height": 300 },
      "grid": [[1, 1, 1], [0, 0, 1], [1, 1, 1]],
      "points": []
    }"#;
    let plan = FloorPlan::from_json(json).unwrap();
    assert_eq!(plan.grid().dimensions(), (3, 3));
    assert_eq!(plan.grid().walkable_count(), 7);
    assert!(plan.catalog().is_empty());
}

#[test]
fn test_ragged_grid_refuses_to_build() {
    let json = r#"{ "image": { "width": 100, "height": 100 }, "grid": ["...", ".."] }"#;
    let err = FloorPlan::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidGrid(GridError::Ragged { row: 1, expected: 3, found: 2 })
    ));
}

#[test]
fn test_empty_grid_refuses_to_build() {
    let json = r#"{ "image": { "width": 100, "height": 100 }, "grid": [] }"#;
    let err = FloorPlan::from_json(json).unwrap_err();
    assert!(matches!(err, DomainError::InvalidGrid(GridError::Empty)));
}

#[test]
fn test_invalid_image_size_is_rejected() {
    let json = r#"{ "image": { "width": 0, "height": 100 }, "grid": ["."] }"#;
    assert!(matches!(
        FloorPlan::from_json(json),
        Err(DomainError::InvalidImageSize { .. })
    ));
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    assert!(matches!(
        FloorPlan::from_json("{ not json"),
        Err(DomainError::SerializationError(_))
    ));
}

#[test]
fn test_missing_file_returns_error() {
    let dir = tempdir().unwrap();
    let source = FilesystemFloorPlanSource::new(Some(dir.path().to_path_buf()));
    assert!(matches!(
        source.load_raw("does_not_exist.json"),
        Err(DomainError::InfrastructureError(_))
    ));
}

#[test]
fn test_list_only_returns_json_documents() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.json"), ASCII_PLAN).unwrap();
    fs::write(dir.path().join("a.json"), ASCII_PLAN).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
    let source = FilesystemFloorPlanSource::new(Some(dir.path().to_path_buf()));
    assert_eq!(source.list().unwrap(), vec!["a.json".to_string(), "b.json".to_string()]);
}

#[test]
fn test_bundled_campus_plan_is_valid() {
    let source = FilesystemFloorPlanSource::new(Some(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/floorplans"),
    ));
    let plan = FloorPlan::from_document(source.load_document("campus.json").unwrap()).unwrap();
    for poi in plan.catalog().iter() {
        let cell = plan.mapper().pixel_to_grid(poi.position());
        assert!(plan.grid().is_walkable(cell), "{} is on a blocked cell", poi.name);
    }
}
