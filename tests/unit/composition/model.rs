use super::*;
use crate::animation::keyframe::Property;

fn shape(id: &str) -> Element {
    Element {
        id: id.to_owned(),
        name: "Shape 1".to_owned(),
        transform: BaseTransform::at(10.0, 20.0, 100.0, 50.0),
        start_time: Some(0.0),
        end_time: Some(5000.0),
        animations: vec![],
        visible: true,
        locked: false,
        kind: ElementKind::Shape(ShapeProps {
            shape_type: ShapeType::Rectangle,
            fill: "#ff0066".to_owned(),
            border_radius: 8.0,
            stroke: None,
            stroke_width: None,
        }),
    }
}

#[test]
fn element_json_is_flat_and_tagged() {
    let el = shape("el-1");
    let v = serde_json::to_value(&el).unwrap();
    assert_eq!(v["type"], "shape");
    assert_eq!(v["shapeType"], "rectangle");
    assert_eq!(v["x"], 10.0);
    assert_eq!(v["startTime"], 0.0);
    let back: Element = serde_json::from_value(v).unwrap();
    assert_eq!(back, el);
}

#[test]
fn text_record_fills_defaults() {
    let el: Element = serde_json::from_str(
        r#"{"id":"t","type":"text","content":"Hello","x":5,"width":200,"height":40}"#,
    )
    .unwrap();
    assert!(el.visible);
    assert!(!el.locked);
    assert_eq!(el.transform.y, None);
    assert_eq!(el.window(), (0.0, 5000.0));
    match el.kind {
        ElementKind::Text(t) => {
            assert_eq!(t.content, "Hello");
            assert_eq!(t.font_weight, 400);
            assert_eq!(t.text_align, TextAlign::Center);
        }
        other => panic!("unexpected kind {}", other.type_name()),
    }
}

#[test]
fn validate_rejects_inverted_window() {
    let mut el = shape("el-1");
    el.start_time = Some(3000.0);
    el.end_time = Some(1000.0);
    assert!(el.validate().is_err());
}

#[test]
fn validate_rejects_out_of_range_opacity() {
    let mut el = shape("el-1");
    el.transform.opacity = Some(1.5);
    assert!(el.validate().is_err());
}

#[test]
fn validate_checks_keyframes() {
    let mut el = shape("el-1");
    el.animations
        .push(Keyframe::new(Property::X, 0.0, 1.0).with_duration(0.0));
    let err = el.validate().unwrap_err().to_string();
    assert!(err.contains("el-1"));
}

#[test]
fn project_rejects_duplicate_ids() {
    let mut p = Project::new("p", "Untitled Project", Canvas::default());
    p.elements.push(shape("a"));
    p.validate().unwrap();
    p.elements.push(shape("a"));
    assert!(p.validate().is_err());
}

#[test]
fn project_defaults_duration() {
    let p: Project = serde_json::from_str(r#"{"id":"p","name":"x"}"#).unwrap();
    assert_eq!(p.duration, 5000.0);
    assert_eq!(p.canvas.preset, "ig-story");
    assert!(p.element("missing").is_none());
}
