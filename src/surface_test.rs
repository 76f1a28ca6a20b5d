#![allow(clippy::float_cmp)]

use super::*;

fn vp(w: f64, h: f64, dpr: f64) -> Viewport {
    Viewport::new(w, h, dpr)
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn backing_size_scales_by_pixel_ratio() {
    let v = vp(400.0, 300.0, 2.0);
    assert_eq!(v.backing_width(), 800.0);
    assert_eq!(v.backing_height(), 600.0);
}

#[test]
fn backing_size_rounds_to_whole_pixels() {
    let v = vp(101.0, 100.0, 1.5);
    assert_eq!(v.backing_width(), 152.0);
    assert_eq!(v.backing_height(), 150.0);
}

#[test]
fn aspect_is_width_over_height() {
    assert_eq!(vp(800.0, 600.0, 1.0).aspect(), 800.0 / 600.0);
    assert_eq!(vp(800.0, 600.0, 3.0).aspect(), 800.0 / 600.0);
}

#[test]
fn zero_or_negative_viewport_is_not_drawable() {
    assert!(!vp(0.0, 600.0, 1.0).is_drawable());
    assert!(!vp(800.0, 0.0, 1.0).is_drawable());
    assert!(!vp(-5.0, 600.0, 1.0).is_drawable());
    assert!(!vp(800.0, 600.0, 0.0).is_drawable());
    assert!(!vp(f64::NAN, 600.0, 1.0).is_drawable());
}

#[test]
fn ordinary_viewport_is_drawable() {
    assert!(vp(800.0, 600.0, 1.0).is_drawable());
}

// =============================================================
// RecordingSurface
// =============================================================

#[test]
fn recording_surface_reports_its_viewport() {
    let mut s = RecordingSurface::new(vp(10.0, 20.0, 1.0));
    assert_eq!(s.viewport(), vp(10.0, 20.0, 1.0));
    s.set_viewport(vp(30.0, 40.0, 2.0));
    assert_eq!(s.viewport(), vp(30.0, 40.0, 2.0));
    assert_eq!(s.backing(), None);
}

#[test]
fn clear_starts_a_new_frame() {
    let mut s = RecordingSurface::new(vp(10.0, 10.0, 1.0));
    s.fill_circle(Point::new(1.0, 1.0), 2.0).expect("draw");
    s.clear(10.0, 10.0).expect("clear");
    assert_eq!(s.frames(), 1);
    assert_eq!(s.ops(), &[DrawOp::Clear { width: 10.0, height: 10.0 }]);
}

#[test]
fn primitives_are_recorded_in_order() {
    let mut s = RecordingSurface::new(vp(10.0, 10.0, 1.0));
    s.clear(10.0, 10.0).expect("clear");
    s.fill_circle(Point::new(1.0, 2.0), 3.0).expect("circle");
    s.stroke_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 1.5).expect("line");
    s.fill_text("Lyra", Point::new(4.0, 4.0)).expect("text");
    assert_eq!(s.ops().len(), 4);
    assert_eq!(s.circles().collect::<Vec<_>>(), vec![(Point::new(1.0, 2.0), 3.0)]);
    assert_eq!(s.lines().count(), 1);
    assert_eq!(s.texts().collect::<Vec<_>>(), vec![(Point::new(4.0, 4.0), "Lyra")]);
}

#[test]
fn draw_ops_serialize_with_op_tag() {
    let op = DrawOp::Circle { center: Point::new(1.0, 2.0), radius: 3.0 };
    let json = serde_json::to_value(&op).expect("serialize");
    assert_eq!(json["op"], "circle");
    assert_eq!(json["center"]["x"], 1.0);
}
