#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn rect(left: f64, top: f64) -> Drawable {
    Drawable::new(left, top, Shape::Rect { width: 100.0, height: 80.0 })
}

fn text(content: &str) -> Drawable {
    Drawable::new(0.0, 0.0, Shape::Text { text: content.to_owned(), font_size: 20.0 })
}

// =============================================================
// Shape serde
// =============================================================

#[test]
fn drawable_serializes_type_tag_and_camel_case_keys() {
    let obj = Drawable::new(1.0, 2.0, Shape::Text { text: "hi".into(), font_size: 22.0 })
        .with_fill("#ff0000")
        .with_stroke("#000000", 3.0);
    let value = serde_json::to_value(&obj).unwrap();
    assert_eq!(value["type"], "i-text");
    assert_eq!(value["fontSize"], 22.0);
    assert_eq!(value["strokeWidth"], 3.0);
    assert_eq!(value["fill"], "#ff0000");
    assert_eq!(value["text"], "hi");
    assert!(value.get("font_size").is_none());
}

#[test]
fn drawable_omits_absent_colours() {
    let value = serde_json::to_value(rect(0.0, 0.0)).unwrap();
    assert!(value.get("fill").is_none());
    assert!(value.get("stroke").is_none());
}

#[test]
fn drawable_deserialize_fills_defaults() {
    let obj: Drawable = serde_json::from_value(json!({
        "type": "circle",
        "left": 10,
        "top": 20,
        "radius": 5
    }))
    .unwrap();
    assert_eq!(obj.shape, Shape::Circle { radius: 5.0 });
    assert_eq!(obj.angle, 0.0);
    assert_eq!(obj.stroke_width, 1.0);
    assert!(obj.selectable);
    assert!(obj.fill.is_none());
}

#[test]
fn drawable_deserialize_generates_missing_ids() {
    let raw = json!({"type": "rect", "left": 0, "top": 0, "width": 1, "height": 1});
    let a: Drawable = serde_json::from_value(raw.clone()).unwrap();
    let b: Drawable = serde_json::from_value(raw).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn drawable_deserialize_rejects_unknown_type() {
    let result = serde_json::from_value::<Drawable>(json!({"type": "triangle", "left": 0, "top": 0}));
    assert!(result.is_err());
}

#[test]
fn drawable_deserialize_path_points() {
    let obj: Drawable = serde_json::from_value(json!({
        "type": "path",
        "left": 5,
        "top": 6,
        "stroke": "#123456",
        "strokeWidth": 4,
        "points": [{"x": 0, "y": 0}, {"x": 10, "y": 3}]
    }))
    .unwrap();
    let Shape::Path { points } = &obj.shape else {
        panic!("expected path");
    };
    assert_eq!(points.len(), 2);
    assert_eq!(obj.stroke_width, 4.0);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn size_of_rect_and_circle() {
    assert_eq!(rect(0.0, 0.0).size(), (100.0, 80.0));
    let circle = Drawable::new(0.0, 0.0, Shape::Circle { radius: 50.0 });
    assert_eq!(circle.size(), (100.0, 100.0));
}

#[test]
fn size_of_text_scales_with_longest_line() {
    let (w1, h1) = text("abcd").size();
    let (w2, h2) = text("ab\nabcdefgh").size();
    assert!(w2 > w1);
    assert!(h2 > h1);
}

#[test]
fn size_of_empty_text_keeps_one_line_height() {
    let (w, h) = text("").size();
    assert_eq!(w, 0.0);
    assert!(h > 0.0);
}

#[test]
fn size_of_path_is_point_extent() {
    let obj = Drawable::new(
        0.0,
        0.0,
        Shape::Path { points: vec![Point::new(0.0, 0.0), Point::new(30.0, 5.0), Point::new(10.0, 12.0)] },
    );
    assert_eq!(obj.size(), (30.0, 12.0));
}

#[test]
fn center_is_box_midpoint() {
    assert_eq!(rect(10.0, 20.0).center(), Point::new(60.0, 60.0));
}

// =============================================================
// Rotation
// =============================================================

#[test]
fn wrap_degrees_examples() {
    assert_eq!(wrap_degrees(370.0), 10.0);
    assert_eq!(wrap_degrees(-5.0), 355.0);
    assert_eq!(wrap_degrees(360.0), 0.0);
    assert_eq!(wrap_degrees(0.0), 0.0);
}

#[test]
fn rotate_by_is_additive_mod_360() {
    let mut obj = rect(0.0, 0.0);
    obj.angle = 10.0;
    obj.rotate_by(-15.0);
    assert_eq!(obj.angle, 355.0);
    obj.rotate_by(15.0);
    assert_eq!(obj.angle, 10.0);
}

#[test]
fn rotate_by_full_turns_returns_home() {
    let mut obj = rect(0.0, 0.0);
    for _ in 0..24 {
        obj.rotate_by(15.0);
    }
    assert!(obj.angle.abs() < 1e-9);
}

// =============================================================
// Scene
// =============================================================

#[test]
fn new_scene_is_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert!(scene.active_id().is_none());
}

#[test]
fn add_preserves_insertion_order() {
    let mut scene = Scene::new();
    let a = scene.add(rect(0.0, 0.0));
    let b = scene.add(rect(1.0, 1.0));
    let ids: Vec<_> = scene.objects().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn remove_returns_object() {
    let mut scene = Scene::new();
    let id = scene.add(rect(0.0, 0.0));
    assert!(scene.remove(&id).is_some());
    assert!(scene.is_empty());
    assert!(scene.remove(&id).is_none());
}

#[test]
fn remove_active_clears_selection() {
    let mut scene = Scene::new();
    let id = scene.add(rect(0.0, 0.0));
    assert!(scene.set_active(Some(id)));
    scene.remove(&id);
    assert!(scene.active_id().is_none());
}

#[test]
fn remove_other_keeps_selection() {
    let mut scene = Scene::new();
    let a = scene.add(rect(0.0, 0.0));
    let b = scene.add(rect(0.0, 0.0));
    scene.set_active(Some(a));
    scene.remove(&b);
    assert_eq!(scene.active_id(), Some(a));
}

#[test]
fn set_active_rejects_unknown_id() {
    let mut scene = Scene::new();
    let a = scene.add(rect(0.0, 0.0));
    scene.set_active(Some(a));
    assert!(!scene.set_active(Some(Uuid::new_v4())));
    assert_eq!(scene.active_id(), Some(a));
}

#[test]
fn set_active_is_exclusive() {
    let mut scene = Scene::new();
    let a = scene.add(rect(0.0, 0.0));
    let b = scene.add(rect(0.0, 0.0));
    scene.set_active(Some(a));
    scene.set_active(Some(b));
    assert_eq!(scene.active_id(), Some(b));
    assert_eq!(scene.active().map(|o| o.id), Some(b));
}

#[test]
fn active_mut_edits_in_place() {
    let mut scene = Scene::new();
    let a = scene.add(rect(0.0, 0.0));
    scene.set_active(Some(a));
    if let Some(obj) = scene.active_mut() {
        obj.fill = Some("red".into());
    }
    assert_eq!(scene.get(&a).and_then(|o| o.fill.as_deref()), Some("red"));
}

#[test]
fn replace_clears_selection() {
    let mut scene = Scene::new();
    let a = scene.add(rect(0.0, 0.0));
    scene.set_active(Some(a));
    scene.replace(vec![rect(1.0, 1.0), rect(2.0, 2.0)]);
    assert_eq!(scene.len(), 2);
    assert!(scene.active_id().is_none());
}

#[test]
fn clear_empties_scene() {
    let mut scene = Scene::new();
    let a = scene.add(rect(0.0, 0.0));
    scene.set_active(Some(a));
    scene.clear();
    assert!(scene.is_empty());
    assert!(scene.active().is_none());
}
