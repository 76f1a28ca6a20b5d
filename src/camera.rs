//! Spherical camera: orientation, field of view and the sky→screen projection.
//!
//! The camera looks out from the center of the unit sky sphere. Its state is
//! the boresight direction (`azimuth`, `polar`), the polar half-angle of the
//! field of view, and the logical viewport it projects onto. The azimuthal
//! half-angle is always derived from the polar one and the aspect ratio.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

use crate::angle::{positive_angle, small_angle};
use crate::config::ViewerConfig;
use crate::consts::{MAX_FOV_POLAR, MAX_ORIENTATION_POLAR, MIN_FOV_POLAR, PAN_GAIN, ZOOM_STEP};
use crate::constellation::Constellation;
use crate::matrix::{Matrix, matmul};
use crate::sphere::{cartesian_to_sphere, sphere_to_cartesian};
use crate::surface::Viewport;

/// A point in screen space (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Where a sky point lands on screen and whether it is inside the field of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub point: Point,
    pub visible: bool,
}

impl Projection {
    fn hidden() -> Self {
        Self { point: Point::new(f64::NAN, f64::NAN), visible: false }
    }
}

/// Camera state for the spherical star map.
///
/// Invariants held after every public call:
/// - `azimuth` in `[0, 2π)`, `polar` in `[-π/2, π/2]`
/// - `fov_polar` in `[π/20, 5π/18]`
/// - `fov_azimuth == atan(aspect / distance_to_plane)`
#[derive(Debug, Clone)]
pub struct Camera {
    azimuth: f64,
    polar: f64,
    fov_polar: f64,
    fov_azimuth: f64,
    distance_to_plane: f64,
    width: f64,
    height: f64,
    aspect: f64,
    scroll_speed: f64,
    rotation: Matrix,
}

impl Camera {
    /// A camera looking at `(azimuth, polar)` with polar half-angle `fov_polar`.
    ///
    /// The viewport starts empty with a square aspect; call [`Camera::resize`]
    /// before projecting.
    #[must_use]
    pub fn new(azimuth: f64, polar: f64, fov_polar: f64) -> Self {
        let mut camera = Self {
            azimuth: 0.0,
            polar: 0.0,
            fov_polar: MIN_FOV_POLAR,
            fov_azimuth: 0.0,
            distance_to_plane: 1.0,
            width: 0.0,
            height: 0.0,
            aspect: 1.0,
            scroll_speed: 1.0,
            rotation: Matrix::rotation_z(0.0),
        };
        camera.set_orientation(azimuth, polar);
        camera.set_fov_polar(fov_polar);
        camera
    }

    /// A camera centered on `focus`'s middle star, sized to fit its bounds in `viewport`.
    #[must_use]
    pub fn focused(focus: &Constellation, viewport: Viewport, config: &ViewerConfig) -> Self {
        let middle = focus.middle_star();
        let extent = focus.half_extent();
        let mut camera = Self::new(middle.azimuth(), middle.polar(), extent.polar + config.focus_margin)
            .with_scroll_speed(config.scroll_speed);
        camera.resize(viewport, extent.azimuth + config.focus_margin);
        camera
    }

    #[must_use]
    pub fn with_scroll_speed(mut self, scroll_speed: f64) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    // --- Queries ---

    /// Sky azimuth of the boresight, in `[0, 2π)`.
    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Sky polar angle of the boresight, in `[-π/2, π/2]`.
    #[must_use]
    pub fn polar(&self) -> f64 {
        self.polar
    }

    #[must_use]
    pub fn fov_polar(&self) -> f64 {
        self.fov_polar
    }

    #[must_use]
    pub fn fov_azimuth(&self) -> f64 {
        self.fov_azimuth
    }

    #[must_use]
    pub fn distance_to_plane(&self) -> f64 {
        self.distance_to_plane
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    #[must_use]
    pub fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }

    // --- Transitions ---

    /// Adopt a new viewport and widen the field of view if needed.
    ///
    /// A non-zero `min_azimuth_fov` guarantees at least that azimuthal
    /// half-angle is visible: when the aspect ratio would make it narrower,
    /// `fov_polar` grows until it fits (subject to the FOV limits).
    /// Returns `false` and leaves the camera unchanged for an undrawable viewport.
    pub fn resize(&mut self, viewport: Viewport, min_azimuth_fov: f64) -> bool {
        if !viewport.is_drawable() {
            tracing::warn!(width = viewport.width, height = viewport.height, "ignoring resize to empty viewport");
            return false;
        }
        self.width = viewport.width;
        self.height = viewport.height;
        self.aspect = viewport.aspect();
        self.fov_azimuth = (self.aspect / self.distance_to_plane).atan();

        if min_azimuth_fov > 0.0 && min_azimuth_fov < FRAC_PI_2 && self.fov_azimuth < min_azimuth_fov {
            self.set_fov_polar((min_azimuth_fov.tan() / self.aspect).atan());
        }
        tracing::debug!(
            width = self.width,
            height = self.height,
            aspect = self.aspect,
            fov_polar = self.fov_polar,
            fov_azimuth = self.fov_azimuth,
            "camera resized"
        );
        true
    }

    /// Pan by a pointer delta in pixels.
    ///
    /// Dragging right turns the view toward higher azimuth so the sky follows
    /// the pointer; dragging down tilts the view up.
    pub fn shift_dir(&mut self, dx: f64, dy: f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            tracing::warn!(dx, dy, "ignoring pan before the viewport is sized");
            return;
        }
        let azimuth_per_px = self.fov_azimuth / self.width;
        let polar_per_px = self.fov_polar / self.height;
        self.set_orientation(
            self.azimuth + azimuth_per_px * dx * PAN_GAIN * self.scroll_speed,
            self.polar + polar_per_px * dy * PAN_GAIN * self.scroll_speed,
        );
        tracing::debug!(azimuth = self.azimuth, polar = self.polar, "camera panned");
    }

    /// Turn the boresight by fixed angles.
    pub fn shift_theta(&mut self, d_azimuth: f64, d_polar: f64) {
        self.set_orientation(self.azimuth + d_azimuth, self.polar + d_polar);
        tracing::debug!(azimuth = self.azimuth, polar = self.polar, "camera turned");
    }

    /// Narrow (`zoom_in`) or widen the field of view by `1 + 0.1 * speed`.
    pub fn zoom(&mut self, zoom_in: bool, speed: f64) {
        let factor = 1.0 + ZOOM_STEP * speed;
        if !factor.is_finite() || factor <= 0.0 {
            tracing::warn!(speed, "ignoring zoom with non-positive factor");
            return;
        }
        let fov = if zoom_in { self.fov_polar / factor } else { self.fov_polar * factor };
        self.set_fov_polar(fov);
        tracing::debug!(zoom_in, fov_polar = self.fov_polar, fov_azimuth = self.fov_azimuth, "camera zoomed");
    }

    /// Scale the field of view by the ratio of successive two-finger distances.
    ///
    /// Fingers spreading apart (`current > previous`) zooms in.
    pub fn pinch_zoom(&mut self, current: f64, previous: f64) {
        let ratio = previous / current;
        if !ratio.is_finite() || ratio <= 0.0 {
            tracing::warn!(current, previous, "ignoring pinch with degenerate distances");
            return;
        }
        self.set_fov_polar(self.fov_polar * ratio);
        tracing::debug!(fov_polar = self.fov_polar, fov_azimuth = self.fov_azimuth, "camera pinched");
    }

    // --- Projection ---

    /// Project a sky point onto the viewport.
    ///
    /// The point is visible when its angular offset from the boresight lies
    /// within both half-angles and it is in front of the camera.
    #[must_use]
    pub fn sphere_to_rect(&self, azimuth: f64, polar: f64) -> Projection {
        let target = Matrix::column(&sphere_to_cartesian(1.0, azimuth, polar));
        let rotated = match matmul(&self.rotation, &target) {
            Ok(rotated) => rotated,
            Err(e) => {
                tracing::error!(error = %e, "camera rotation has the wrong shape");
                return Projection::hidden();
            }
        };
        let Some(camera_space) = rotated.as_vec3() else {
            tracing::error!("rotated sky vector is not 3x1");
            return Projection::hidden();
        };
        let forward = camera_space[1];
        let relative = cartesian_to_sphere(camera_space);

        let visible = small_angle(relative.azimuth).abs() <= self.fov_azimuth
            && small_angle(relative.polar).abs() <= self.fov_polar
            && forward > 0.0;

        let plane_y = self.distance_to_plane * relative.polar.tan();
        let plane_x = self.distance_to_plane * relative.azimuth.tan() / self.aspect;
        let point = Point::new((-plane_x + 1.0) / 2.0 * self.width, (-plane_y + 1.0) / 2.0 * self.height);
        Projection { point, visible }
    }

    // --- Internals ---

    fn set_orientation(&mut self, azimuth: f64, polar: f64) {
        self.azimuth = positive_angle(azimuth);
        // Polar stops at the poles rather than wrapping over them.
        self.polar = polar.clamp(-MAX_ORIENTATION_POLAR, MAX_ORIENTATION_POLAR);
        self.reorient();
    }

    /// Clamp and store `fov_polar`, then refresh everything derived from it.
    fn set_fov_polar(&mut self, fov_polar: f64) {
        if !fov_polar.is_finite() {
            tracing::warn!(fov_polar, "ignoring non-finite field of view");
            return;
        }
        self.fov_polar = fov_polar.clamp(MIN_FOV_POLAR, MAX_FOV_POLAR);
        self.distance_to_plane = 1.0 / self.fov_polar.tan();
        self.fov_azimuth = (self.aspect / self.distance_to_plane).atan();
    }

    /// Recompose the sky→camera rotation: first about the polar axis so the
    /// boresight azimuth lands on +y, then about the east axis to level it.
    fn reorient(&mut self) {
        match matmul(&Matrix::rotation_x(self.polar), &Matrix::rotation_z(-self.azimuth)) {
            Ok(rotation) => self.rotation = rotation,
            Err(e) => tracing::error!(error = %e, "failed to compose camera rotation"),
        }
    }
}
