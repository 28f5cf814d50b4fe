use serde_json::json;

use super::*;

#[test]
fn canvas_doc_accepts_null_data() {
    let doc: CanvasDoc = serde_json::from_value(json!({"id": "abc", "canvas_data": null})).unwrap();
    assert_eq!(doc, CanvasDoc { id: "abc".into(), canvas_data: None });
}

#[test]
fn canvas_doc_accepts_missing_data() {
    let doc: CanvasDoc = serde_json::from_value(json!({"id": "abc"})).unwrap();
    assert!(doc.canvas_data.is_none());
}

#[test]
fn canvas_doc_keeps_snapshot_opaque() {
    let snapshot = json!({"version": 1, "objects": [{"type": "rect", "unknown": [1, 2]}]});
    let doc: CanvasDoc = serde_json::from_value(json!({"id": "abc", "canvas_data": snapshot.clone()})).unwrap();
    assert_eq!(doc.canvas_data, Some(snapshot));
}

#[test]
fn save_body_serializes_field_name() {
    let body = SaveCanvasBody { canvas_data: json!({"objects": []}) };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({"canvas_data": {"objects": []}}));
}

#[test]
fn create_body_sends_explicit_null() {
    let body = CreateCanvasBody::default();
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({"canvas_data": null}));
}
