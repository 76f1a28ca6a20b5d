#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use super::*;

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn defaults_match_interaction_constants() {
    let c = ViewerConfig::default();
    assert_eq!(c.scroll_speed, 1.0);
    assert!(!c.static_display);
    assert_eq!(c.default_focus, "Ori");
    assert!(approx_eq(c.focus_margin, 2.0 * PI / 180.0));
    assert!(approx_eq(c.initial_fov, PI / 12.0));
    assert_eq!(c.wheel_speed, 0.3);
    assert!(approx_eq(c.key_step, 10.0 * PI / 180.0));
    assert_eq!(c.touch_pan_scale, 2.0);
}

#[test]
fn builders_override_single_fields() {
    let c = ViewerConfig::default()
        .with_scroll_speed(2.5)
        .with_static_display(true)
        .with_default_focus("UMa")
        .with_focus_margin(0.0)
        .with_initial_fov(0.5);
    assert_eq!(c.scroll_speed, 2.5);
    assert!(c.static_display);
    assert_eq!(c.default_focus, "UMa");
    assert_eq!(c.focus_margin, 0.0);
    assert_eq!(c.initial_fov, 0.5);
    assert_eq!(c.wheel_speed, ViewerConfig::default().wheel_speed);
}

#[test]
fn partial_json_keeps_defaults() {
    let c = ViewerConfig::from_json(r#"{"scroll_speed": 3.0, "default_focus": "Cyg"}"#).expect("valid config");
    assert_eq!(c.scroll_speed, 3.0);
    assert_eq!(c.default_focus, "Cyg");
    assert!(!c.static_display);
    assert_eq!(c.touch_pan_scale, 2.0);
}

#[test]
fn empty_json_object_is_default() {
    let c = ViewerConfig::from_json("{}").expect("valid config");
    assert_eq!(c, ViewerConfig::default());
}

#[test]
fn mistyped_field_is_rejected() {
    assert!(ViewerConfig::from_json(r#"{"static_display": "yes"}"#).is_err());
}

#[test]
fn config_round_trips_through_json() {
    let c = ViewerConfig::default().with_default_focus("Lyr");
    let json = serde_json::to_string(&c).expect("serialize");
    assert_eq!(ViewerConfig::from_json(&json).expect("deserialize"), c);
}
