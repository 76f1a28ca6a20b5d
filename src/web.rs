//! Browser bindings: a [`Surface`] over an HTML canvas and the
//! `wasm_bindgen` entry point the page constructs.
//!
//! The host page wires DOM events to [`WebStarMap`]'s methods, passing plain
//! coordinates. Drawing failures inside event handlers are logged, not thrown.
//! [`start`] routes those logs and any panic message to the browser console.

use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Point;
use crate::catalog::Catalog;
use crate::config::ViewerConfig;
use crate::consts::{INK, LABEL_FONT};
use crate::engine::StarMap;
use crate::input::Key;
use crate::surface::{Surface, SurfaceError, Viewport};

fn backend(err: JsValue) -> SurfaceError {
    SurfaceError::Backend(format!("{err:?}"))
}

/// A 2D canvas sized to fill its parent element.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to `canvas`'s 2D context.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NoContext`] when the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(backend)?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        let pixel_ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let (width, height) = match self.canvas.parent_element() {
            Some(parent) => (parent.client_width(), parent.client_height()),
            None => (self.canvas.client_width(), self.canvas.client_height()),
        };
        Viewport::new(f64::from(width), f64::from(height), pixel_ratio)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn set_backing_size(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.canvas.set_width(viewport.backing_width() as u32);
        self.canvas.set_height(viewport.backing_height() as u32);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width)).map_err(backend)?;
        style.set_property("height", &format!("{}px", viewport.height)).map_err(backend)?;
        // Resizing resets the context, so the pixel-ratio scale goes back on every time.
        let r = viewport.pixel_ratio;
        self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0).map_err(backend)
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU).map_err(backend)?;
        self.ctx.set_fill_style_str(INK);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_line_width(width);
        self.ctx.set_stroke_style_str(INK);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_fill_style_str(INK);
        self.ctx.fill_text(text, at.x, at.y).map_err(backend)
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn report(event: &str, result: Result<(), SurfaceError>) {
    if let Err(e) = result {
        tracing::warn!(event, error = %e, "redraw failed");
    }
}

/// Touch coordinates arrive flattened as `[x0, y0, x1, y1, ...]`.
fn touches(coords: &[f64]) -> Vec<Point> {
    coords.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1])).collect()
}

/// Module initializer: panic messages and `tracing` events at info level and
/// above go to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger unavailable: {e}")));
    }
}

/// Star map viewer exported to JavaScript.
#[wasm_bindgen]
pub struct WebStarMap {
    inner: StarMap<CanvasSurface>,
}

#[wasm_bindgen]
impl WebStarMap {
    /// Build a viewer on `canvas` focused on the constellation abbreviated `focus`.
    ///
    /// `config_json` is an optional partial [`ViewerConfig`] object.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` for a bad catalog or config, or a canvas without a 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        catalog_json: &str,
        focus: &str,
        config_json: Option<String>,
    ) -> Result<WebStarMap, JsValue> {
        let config = match config_json {
            Some(json) => ViewerConfig::from_json(&json).map_err(js_error)?,
            None => ViewerConfig::default(),
        };
        let catalog = Catalog::from_json(catalog_json).map_err(js_error)?;
        let surface = CanvasSurface::new(canvas).map_err(js_error)?;
        let inner = StarMap::focused(surface, catalog, focus, config).map_err(js_error)?;
        Ok(Self { inner })
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        report("pointer_down", self.inner.on_pointer_down(Point::new(x, y)));
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        report("pointer_move", self.inner.on_pointer_move(Point::new(x, y)));
    }

    pub fn pointer_up(&mut self) {
        report("pointer_up", self.inner.on_pointer_up());
    }

    pub fn touch_start(&mut self, coords: &[f64]) {
        report("touch_start", self.inner.on_touch_start(&touches(coords)));
    }

    pub fn touch_move(&mut self, coords: &[f64]) {
        report("touch_move", self.inner.on_touch_move(&touches(coords)));
    }

    pub fn touch_end(&mut self) {
        report("touch_end", self.inner.on_touch_end());
    }

    pub fn wheel(&mut self, delta_y: f64) {
        report("wheel", self.inner.on_wheel(delta_y));
    }

    /// `code` is the DOM `KeyboardEvent.code`.
    pub fn key_down(&mut self, code: &str) {
        report("key_down", self.inner.on_key_down(&Key::from(code)));
    }

    pub fn resize(&mut self) {
        report("resize", self.inner.on_resize());
    }

    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.inner.camera().azimuth()
    }

    #[must_use]
    pub fn polar(&self) -> f64 {
        self.inner.camera().polar()
    }

    #[must_use]
    pub fn fov_polar(&self) -> f64 {
        self.inner.camera().fov_polar()
    }
}
