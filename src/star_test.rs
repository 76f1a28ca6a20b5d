#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn new_star_has_no_label() {
    let s = Star::new(0.1, 0.2, 3.0);
    assert_eq!(s.azimuth(), 0.1);
    assert_eq!(s.polar(), 0.2);
    assert_eq!(s.magnitude(), 3.0);
    assert_eq!(s.label(), None);
}

#[test]
fn with_label_attaches_text() {
    let s = Star::new(0.0, 0.0, 1.0).with_label("Vega");
    assert_eq!(s.label(), Some("Vega"));
}

#[test]
fn polar_is_not_clamped() {
    let s = Star::new(0.0, 2.5, 1.0);
    assert_eq!(s.polar(), 2.5);
}

#[test]
fn reference_magnitude_has_base_radius() {
    let s = Star::new(0.0, 0.0, 3.63);
    assert!(approx_eq(s.radius(), 4.0));
}

#[test]
fn brighter_star_is_larger() {
    let bright = Star::new(0.0, 0.0, 0.0);
    let faint = Star::new(0.0, 0.0, 5.0);
    assert!(bright.radius() > faint.radius());
}

#[test]
fn radius_follows_pogson_scale() {
    // Five magnitudes is a factor of ~100 in brightness; radius takes the 8th root.
    let s = Star::new(0.0, 0.0, 3.63 - 5.0);
    let expected = 2.512_f64.powf(5.0).powf(0.125) * 4.0;
    assert!(approx_eq(s.radius(), expected));
}

#[test]
fn radius_stays_positive_for_very_faint_stars() {
    let s = Star::new(0.0, 0.0, 30.0);
    assert!(s.radius() > 0.0);
}

#[test]
fn set_label_overwrites() {
    let mut s = Star::new(0.0, 0.0, 1.0).with_label("a");
    s.set_label("b");
    assert_eq!(s.label(), Some("b"));
}
