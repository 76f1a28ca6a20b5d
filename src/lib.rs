//! Spherical star map engine.
//!
//! Projects a catalog of constellations from the unit sky sphere onto a flat
//! viewport through a pannable, zoomable camera, and redraws on every input.
//! The engine is compiled to WebAssembly for the browser and also runs
//! headless, drawing into a [`surface::RecordingSurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::StarMap`]: camera, catalog and gesture state behind one surface |
//! | [`camera`] | Orientation, field of view and the sky→screen projection |
//! | [`input`] | Camera commands and the gesture state machine |
//! | [`render`] | Culling and drawing of stars, lines and labels |
//! | [`catalog`] | Catalog JSON schema and validation |
//! | [`constellation`] | Constellation graph and its draw order |
//! | [`star`] | Star position, magnitude and display radius |
//! | [`surface`] | Drawing surface trait and the recording surface |
//! | [`web`] | Canvas surface and the `wasm_bindgen` entry point |
//! | [`config`] | Viewer tunables |
//! | [`matrix`] | Small dense matrices and rotations |
//! | [`sphere`] | Spherical/Cartesian conversion |
//! | [`angle`] | Angle normalization |
//! | [`consts`] | Shared numeric constants (FOV limits, step sizes, label style) |

pub mod angle;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod constellation;
pub mod engine;
pub mod input;
pub mod matrix;
pub mod render;
pub mod sphere;
pub mod star;
pub mod surface;
pub mod web;

pub use camera::{Camera, Point, Projection};
pub use catalog::{Catalog, CatalogError};
pub use config::ViewerConfig;
pub use constellation::Constellation;
pub use engine::{EngineError, StarMap};
pub use input::{Command, Key};
pub use star::Star;
pub use surface::{DrawOp, RecordingSurface, Surface, SurfaceError, Viewport};
