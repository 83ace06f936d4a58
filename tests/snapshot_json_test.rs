//! Serialized views consumed by presentation layers

use block_blast::core::GameEngine;

#[test]
fn placement_result_serializes_for_renderers() {
    let mut engine = GameEngine::new(1);
    let result = engine.attempt_placement(0, 0, 0).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["block_index"], 0);
    assert_eq!(v["score"], 0);
    assert_eq!(v["game_over"], false);
    assert!(v["lines_cleared"].as_array().unwrap().is_empty());
    assert_eq!(v["grid"]["cells"][0][0], "filled");
    assert_eq!(v["grid"]["cells"].as_array().unwrap().len(), 8);
}

#[test]
fn game_snapshot_serializes_offered_shapes() {
    let engine = GameEngine::new(2);
    let v = serde_json::to_value(engine.snapshot()).unwrap();

    assert_eq!(v["offered"].as_array().unwrap().len(), 3);
    assert!(v["offered"][0]["cells"].is_array());
    assert_eq!(v["high_score"], 0);
}

#[test]
fn line_refs_use_lowercase_axis() {
    let v = serde_json::to_value(block_blast::types::LineRef::col(3)).unwrap();
    assert_eq!(v["axis"], "col");
    assert_eq!(v["index"], 3);
}
