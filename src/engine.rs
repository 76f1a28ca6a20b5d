//! The star map viewer: camera, catalog, gesture state and a drawing surface.
//!
//! [`StarMap`] is generic over [`Surface`] so the same state machine runs in
//! the browser (see [`crate::web`]) and headless under tests and the CLI.
//! Every state-changing call finishes with a full redraw.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point};
use crate::catalog::{Catalog, CatalogError};
use crate::config::ViewerConfig;
use crate::constellation::Constellation;
use crate::input::{Command, Gesture, InputState, Key};
use crate::render;
use crate::surface::{Surface, SurfaceError};

/// Error building a [`StarMap`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// An interactive view of a set of constellations.
pub struct StarMap<S> {
    camera: Camera,
    constellations: Vec<Constellation>,
    surface: S,
    gesture: Gesture,
    config: ViewerConfig,
}

impl<S: Surface> StarMap<S> {
    /// A viewer looking at azimuth 0 on the horizon with `config.initial_fov`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Surface`] if the first draw fails.
    pub fn new(surface: S, constellations: Vec<Constellation>, config: ViewerConfig) -> Result<Self, EngineError> {
        let camera = Camera::new(0.0, 0.0, config.initial_fov).with_scroll_speed(config.scroll_speed);
        let mut map = Self::assemble(surface, constellations, camera, config);
        map.apply(Command::Resize { min_azimuth_fov: 0.0 })?;
        Ok(map)
    }

    /// A viewer centered on the constellation abbreviated `focus`, zoomed to fit it.
    ///
    /// An unknown `focus` falls back to `config.default_focus`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Catalog`] when neither abbreviation is in the
    /// catalog, or [`EngineError::Surface`] if the first draw fails.
    pub fn focused(surface: S, catalog: Catalog, focus: &str, config: ViewerConfig) -> Result<Self, EngineError> {
        let target = catalog.resolve_focus(focus, &config.default_focus)?;
        tracing::debug!(focus = target.abbreviation(), "focusing viewer");
        let viewport = surface.viewport();
        let camera = Camera::focused(target, viewport, &config);

        let mut map = Self::assemble(surface, catalog.into_constellations(), camera, config);
        // The focused camera is already sized; only the backing store is left.
        if viewport.is_drawable() {
            map.surface.set_backing_size(viewport)?;
        }
        map.update()?;
        Ok(map)
    }

    fn assemble(surface: S, constellations: Vec<Constellation>, camera: Camera, config: ViewerConfig) -> Self {
        Self { camera, constellations, surface, gesture: Gesture::new(&config), config }
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn gesture_state(&self) -> InputState {
        self.gesture.state()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Commands ---

    /// Apply one camera command, then redraw.
    ///
    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`].
    pub fn apply(&mut self, command: Command) -> Result<(), SurfaceError> {
        match command {
            Command::Pan { dx, dy } => self.camera.shift_dir(dx, dy),
            Command::DiscretePan { azimuth, polar } => self.camera.shift_theta(azimuth, polar),
            Command::Zoom { zoom_in, speed } => self.camera.zoom(zoom_in, speed),
            Command::PinchZoom { current, previous } => self.camera.pinch_zoom(current, previous),
            Command::Resize { min_azimuth_fov } => {
                let viewport = self.surface.viewport();
                if self.camera.resize(viewport, min_azimuth_fov) {
                    self.surface.set_backing_size(viewport)?;
                }
            }
        }
        self.update()
    }

    /// Clear the surface and draw every constellation.
    ///
    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`].
    pub fn update(&mut self) -> Result<(), SurfaceError> {
        render::draw(&mut self.surface, &self.camera, &self.constellations)
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_pointer_down(&mut self, at: Point) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.pointer_down(at);
        self.dispatch(commands)
    }

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_pointer_move(&mut self, at: Point) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.pointer_move(at);
        self.dispatch(commands)
    }

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_pointer_up(&mut self) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.pointer_up();
        self.dispatch(commands)
    }

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.touch_start(touches);
        self.dispatch(commands)
    }

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.touch_move(touches);
        self.dispatch(commands)
    }

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_touch_end(&mut self) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.touch_end();
        self.dispatch(commands)
    }

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_wheel(&mut self, dy: f64) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.wheel(dy);
        self.dispatch(commands)
    }

    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_key_down(&mut self, key: &Key) -> Result<(), SurfaceError> {
        if self.config.static_display {
            return Ok(());
        }
        let commands = self.gesture.key_down(key);
        self.dispatch(commands)
    }

    /// The container changed size. Honored in static display mode too.
    ///
    /// # Errors
    ///
    /// Propagates the surface's [`SurfaceError`] from the redraw.
    pub fn on_resize(&mut self) -> Result<(), SurfaceError> {
        self.apply(Command::Resize { min_azimuth_fov: 0.0 })
    }

    fn dispatch(&mut self, commands: Vec<Command>) -> Result<(), SurfaceError> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }
}
