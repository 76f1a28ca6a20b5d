use std::f64::consts::PI;

use super::*;
use crate::star::Star;
use crate::surface::{DrawOp, RecordingSurface, Viewport};

const EPSILON: f64 = 1e-9;

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0, 1.0)
}

fn camera() -> Camera {
    let mut cam = Camera::new(0.0, 0.0, PI / 12.0);
    assert!(cam.resize(viewport(), 0.0));
    cam
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(viewport())
}

// =============================================================
// SkyPainter
// =============================================================

#[test]
fn point_at_boresight_lands_in_center() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_point(0.0, 0.0, 3.0).unwrap();
    let (center, radius) = s.circles().next().unwrap();
    assert!((center.x - 400.0).abs() < EPSILON);
    assert!((center.y - 300.0).abs() < EPSILON);
    assert!((radius - 3.0).abs() < EPSILON);
}

#[test]
fn point_behind_camera_is_culled() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_point(PI, 0.0, 3.0).unwrap();
    assert!(s.ops().is_empty());
}

#[test]
fn point_outside_fov_is_culled() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_point(0.0, 0.5, 3.0).unwrap();
    assert!(s.ops().is_empty());
}

#[test]
fn label_is_offset_down_and_right() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_label(0.0, 0.0, "Orion").unwrap();
    let (at, text) = s.texts().next().unwrap();
    assert_eq!(text, "Orion");
    assert!((at.x - 420.0).abs() < EPSILON);
    assert!((at.y - 320.0).abs() < EPSILON);
}

#[test]
fn label_outside_fov_is_culled() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_label(PI, 0.0, "Hidden").unwrap();
    assert_eq!(s.texts().count(), 0);
}

#[test]
fn line_with_both_ends_visible_is_drawn() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_line(-0.05, 0.0, 0.05, 0.0, 1.5).unwrap();
    let (from, to, width) = s.lines().next().unwrap();
    assert!(from.x > 400.0 && to.x < 400.0);
    assert!((width - 1.5).abs() < EPSILON);
}

#[test]
fn line_with_one_end_visible_is_drawn_in_full() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_line(0.0, 0.0, 0.0, 0.4, 1.0).unwrap();
    let (from, to, _) = s.lines().next().unwrap();
    assert!((from.y - 300.0).abs() < EPSILON);
    assert!(to.y < 0.0, "far end projects off screen: {}", to.y);
}

#[test]
fn line_with_no_end_visible_is_skipped() {
    let cam = camera();
    let mut s = surface();
    SkyPainter::new(&cam, &mut s).draw_line(-0.8, 0.0, 0.8, 0.0, 1.0).unwrap();
    assert_eq!(s.lines().count(), 0);
}

// =============================================================
// draw
// =============================================================

#[test]
fn draw_clears_first_with_viewport_size() {
    let cam = camera();
    let mut s = surface();
    draw(&mut s, &cam, &[]).unwrap();
    assert_eq!(s.ops(), &[DrawOp::Clear { width: 800.0, height: 600.0 }]);
    assert_eq!(s.frames(), 1);
}

#[test]
fn draw_replaces_previous_frame() {
    let cam = camera();
    let c = Constellation::new(vec![Star::new(0.0, 0.0, 2.0)], vec![], "Solo", "Sol", 0, (0.1, 0.1)).unwrap();
    let mut s = surface();
    draw(&mut s, &cam, std::slice::from_ref(&c)).unwrap();
    draw(&mut s, &cam, std::slice::from_ref(&c)).unwrap();
    assert_eq!(s.frames(), 2);
    assert_eq!(s.circles().count(), 1);
    assert_eq!(s.texts().count(), 1);
}

#[test]
fn draw_covers_every_constellation() {
    let cam = camera();
    let a = Constellation::new(vec![Star::new(0.02, 0.0, 2.0)], vec![], "A", "Aaa", 0, (0.1, 0.1)).unwrap();
    let b = Constellation::new(vec![Star::new(-0.02, 0.0, 2.0)], vec![], "B", "Bbb", 0, (0.1, 0.1)).unwrap();
    let mut s = surface();
    draw(&mut s, &cam, &[a, b]).unwrap();
    let labels: Vec<&str> = s.texts().map(|(_, t)| t).collect();
    assert_eq!(labels, vec!["A", "B"]);
}
