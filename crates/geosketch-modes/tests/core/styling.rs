//! Style assignment through the mode interface

use geosketch_core::ModeError;
use geosketch_modes::{DrawMode, LineStringMode, StaticMode};
use serde_json::{json, Value};

#[test]
fn test_default_styles_are_empty() {
    let mode = LineStringMode::new();
    assert!(mode.styles().is_empty());
}

#[test]
fn test_non_mapping_is_rejected_and_styles_kept() {
    let mut mode = LineStringMode::new();

    for bad in [json!("red"), json!(1), json!([1, 2]), Value::Null] {
        let err = mode.set_styles(bad).unwrap_err();
        assert!(matches!(err, ModeError::InvalidStyleAssignment { .. }));
        assert!(mode.styles().is_empty());
    }
}

#[test]
fn test_valid_styles_replace_previous() {
    let mut mode = LineStringMode::new();
    mode.set_styles(json!({ "lineStringColor": "#ff0000", "lineStringWidth": 4 }))
        .unwrap();
    assert_eq!(
        Value::Object(mode.styles()),
        json!({ "lineStringColor": "#ff0000", "lineStringWidth": 4.0 })
    );

    mode.set_styles(json!({ "closingPointColor": "#000" })).unwrap();
    assert_eq!(
        Value::Object(mode.styles()),
        json!({ "closingPointColor": "#000" })
    );
}

#[test]
fn test_nonconforming_mapping_keeps_previous() {
    let mut mode = LineStringMode::new();
    mode.set_styles(json!({ "lineStringColor": "#123456" })).unwrap();

    assert!(mode.set_styles(json!({ "fillColor": "#ffffff" })).is_err());
    assert!(mode.set_styles(json!({ "lineStringColor": "blue" })).is_err());
    assert!(mode.set_styles(json!({ "lineStringWidth": -1 })).is_err());

    assert_eq!(
        Value::Object(mode.styles()),
        json!({ "lineStringColor": "#123456" })
    );
}

#[test]
fn test_static_mode_has_no_styles() {
    let mut mode = StaticMode::new();
    assert!(mode.set_styles(json!({})).is_ok());
    assert!(mode.set_styles(json!({ "lineStringColor": "#fff" })).is_err());
}

#[test]
fn test_null_style_value_is_rejected() {
    let mut mode = LineStringMode::new();
    mode.set_styles(json!({ "lineStringColor": "#123456" })).unwrap();

    let err = mode
        .set_styles(json!({ "lineStringColor": null }))
        .unwrap_err();
    assert!(matches!(err, ModeError::InvalidStyleAssignment { .. }));
    assert_eq!(
        Value::Object(mode.styles()),
        json!({ "lineStringColor": "#123456" })
    );
}
