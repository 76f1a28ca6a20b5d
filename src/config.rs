//! Viewer configuration.
//!
//! Every field has a default, so hosts only spell out what they change,
//! either through the `with_*` builders or a partial JSON object.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FOCUS, DEFAULT_FOV_POLAR, FOCUS_MARGIN, KEY_STEP, TOUCH_PAN_SCALE, WHEEL_ZOOM_SPEED,
};

/// Tunables for a star map viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Multiplier for drag panning. Default: 1.0.
    pub scroll_speed: f64,
    /// When set, the viewer ignores all pointer, touch, wheel and key input.
    pub static_display: bool,
    /// Abbreviation to focus when the requested one is not in the catalog. Default: `"Ori"`.
    pub default_focus: String,
    /// Radians added around a focus constellation's bounds. Default: 2°.
    pub focus_margin: f64,
    /// Polar half-angle used when no focus is given. Default: 15°.
    pub initial_fov: f64,
    /// Zoom speed per wheel event. Default: 0.3.
    pub wheel_speed: f64,
    /// Radians turned per arrow key press. Default: 10°.
    pub key_step: f64,
    /// Touch drags pan at this multiple of pointer drags. Default: 2.0.
    pub touch_pan_scale: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 1.0,
            static_display: false,
            default_focus: DEFAULT_FOCUS.to_owned(),
            focus_margin: FOCUS_MARGIN,
            initial_fov: DEFAULT_FOV_POLAR,
            wheel_speed: WHEEL_ZOOM_SPEED,
            key_step: KEY_STEP,
            touch_pan_scale: TOUCH_PAN_SCALE,
        }
    }
}

impl ViewerConfig {
    /// Parse a (possibly partial) JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_scroll_speed(mut self, scroll_speed: f64) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    #[must_use]
    pub fn with_static_display(mut self, static_display: bool) -> Self {
        self.static_display = static_display;
        self
    }

    #[must_use]
    pub fn with_default_focus(mut self, abbreviation: impl Into<String>) -> Self {
        self.default_focus = abbreviation.into();
        self
    }

    #[must_use]
    pub fn with_focus_margin(mut self, margin: f64) -> Self {
        self.focus_margin = margin;
        self
    }

    #[must_use]
    pub fn with_initial_fov(mut self, fov: f64) -> Self {
        self.initial_fov = fov;
        self
    }

    #[must_use]
    pub fn with_key_step(mut self, step: f64) -> Self {
        self.key_step = step;
        self
    }
}
