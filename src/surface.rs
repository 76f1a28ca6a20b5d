//! Drawing surface abstraction.
//!
//! The engine only ever talks to a [`Surface`]: the browser canvas in
//! [`crate::web`] and the headless [`RecordingSurface`] both implement it.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::Serialize;

use crate::camera::Point;

/// Error raised by a drawing backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// A backend call failed; the payload is the backend's own description.
    #[error("drawing backend call failed: {0}")]
    Backend(String),
    /// The backend could not provide a 2D drawing context.
    #[error("2d drawing context unavailable")]
    NoContext,
}

/// Logical viewport size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self { width, height, pixel_ratio }
    }

    /// Backing-store width in device pixels.
    #[must_use]
    pub fn backing_width(&self) -> f64 {
        (self.width * self.pixel_ratio).round()
    }

    /// Backing-store height in device pixels.
    #[must_use]
    pub fn backing_height(&self) -> f64 {
        (self.height * self.pixel_ratio).round()
    }

    /// Width over height of the backing store.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.backing_width() / self.backing_height()
    }

    /// Whether the viewport has a positive, finite area to draw into.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.pixel_ratio.is_finite()
            && self.pixel_ratio > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.backing_width() >= 1.0
            && self.backing_height() >= 1.0
    }
}

/// A 2D canvas-like target.
///
/// Coordinates passed to the drawing calls are logical (CSS) pixels; the
/// surface applies the pixel ratio set by [`Surface::set_backing_size`].
pub trait Surface {
    /// Current logical size of the surface's container and its pixel ratio.
    fn viewport(&self) -> Viewport;

    /// Resize the backing store to match `viewport` and scale drawing by its pixel ratio.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend rejects the resize or transform.
    fn set_backing_size(&mut self, viewport: Viewport) -> Result<(), SurfaceError>;

    /// Clear the rectangle from the origin to `(width, height)`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend call fails.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Fill a circle.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend call fails.
    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError>;

    /// Stroke a straight segment.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend call fails.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64) -> Result<(), SurfaceError>;

    /// Fill `text` with its baseline origin at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend call fails.
    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError>;
}

/// One primitive emitted to a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point, width: f64 },
    Text { at: Point, text: String },
}

/// Headless surface that records every primitive of the latest frame.
///
/// Each [`Surface::clear`] starts a new frame: previously recorded ops are
/// dropped and the frame counter advances.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    viewport: Viewport,
    backing: Option<Viewport>,
    ops: Vec<DrawOp>,
    frames: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, backing: None, ops: Vec::new(), frames: 0 }
    }

    /// Simulate the container changing size. Takes effect on the next resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Primitives drawn since the last clear.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of clears (i.e. redraws) performed so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Viewport most recently applied through [`Surface::set_backing_size`].
    #[must_use]
    pub fn backing(&self) -> Option<Viewport> {
        self.backing
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, radius } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, width } => Some((*from, *to, *width)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { at, text } => Some((*at, text.as_str())),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_backing_size(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.backing = Some(viewport);
        Ok(())
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.ops.clear();
        self.frames += 1;
        self.ops.push(DrawOp::Clear { width, height });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Circle { center, radius });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Line { from, to, width });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Text { at, text: text.to_owned() });
        Ok(())
    }
}
