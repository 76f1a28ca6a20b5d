//! Rendering: projects sky primitives through the camera onto a [`Surface`].
//!
//! Nothing here mutates camera or catalog state. Every primitive is culled
//! against the camera's field of view before it reaches the surface.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Camera, Point};
use crate::consts::LABEL_OFFSET_PX;
use crate::constellation::Constellation;
use crate::surface::{Surface, SurfaceError};

/// Sky-space drawing primitives bound to one camera and one surface.
pub struct SkyPainter<'a, S> {
    camera: &'a Camera,
    surface: &'a mut S,
}

impl<'a, S: Surface> SkyPainter<'a, S> {
    #[must_use]
    pub fn new(camera: &'a Camera, surface: &'a mut S) -> Self {
        Self { camera, surface }
    }

    /// Fill a circle at the sky point, if it is in view.
    ///
    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`].
    pub fn draw_point(&mut self, azimuth: f64, polar: f64, radius: f64) -> Result<(), SurfaceError> {
        let p = self.camera.sphere_to_rect(azimuth, polar);
        if !p.visible {
            return Ok(());
        }
        self.surface.fill_circle(p.point, radius)
    }

    /// Draw `text` beside the sky point, if it is in view.
    ///
    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`].
    pub fn draw_label(&mut self, azimuth: f64, polar: f64, text: &str) -> Result<(), SurfaceError> {
        let p = self.camera.sphere_to_rect(azimuth, polar);
        if !p.visible {
            return Ok(());
        }
        let at = Point::new(p.point.x + LABEL_OFFSET_PX, p.point.y + LABEL_OFFSET_PX);
        self.surface.fill_text(text, at)
    }

    /// Stroke a segment between two sky points when either end is in view.
    ///
    /// A segment crossing the view with both ends outside it is skipped; one
    /// with a single end in view is drawn in full.
    ///
    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`].
    pub fn draw_line(
        &mut self,
        azimuth_a: f64,
        polar_a: f64,
        azimuth_b: f64,
        polar_b: f64,
        width: f64,
    ) -> Result<(), SurfaceError> {
        let a = self.camera.sphere_to_rect(azimuth_a, polar_a);
        let b = self.camera.sphere_to_rect(azimuth_b, polar_b);
        if !(a.visible || b.visible) || !a.point.is_finite() || !b.point.is_finite() {
            return Ok(());
        }
        self.surface.stroke_line(a.point, b.point, width)
    }
}

/// Clear the surface and draw every constellation through `camera`.
///
/// # Errors
///
/// Returns the first [`SurfaceError`] raised by the surface.
pub fn draw<S: Surface>(surface: &mut S, camera: &Camera, constellations: &[Constellation]) -> Result<(), SurfaceError> {
    surface.clear(camera.width(), camera.height())?;
    let mut painter = SkyPainter::new(camera, surface);
    for constellation in constellations {
        constellation.draw(&mut painter)?;
    }
    Ok(())
}
