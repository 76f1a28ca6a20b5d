//! A single star on the unit sky sphere.

#[cfg(test)]
#[path = "star_test.rs"]
mod star_test;

use crate::consts::{BASE_STAR_RADIUS_PX, POGSON_RATIO, RADIUS_EXPONENT, REFERENCE_MAGNITUDE};

/// A labeled point on the sky with an apparent magnitude.
///
/// Coordinates are radians. Polar is conventionally within `±π/2` but is not
/// clamped here; only the camera's own polar angle is.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    azimuth: f64,
    polar: f64,
    magnitude: f64,
    label: Option<String>,
}

impl Star {
    #[must_use]
    pub fn new(azimuth: f64, polar: f64, magnitude: f64) -> Self {
        Self { azimuth, polar, magnitude, label: None }
    }

    /// The same star carrying `label`.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    #[must_use]
    pub fn polar(&self) -> f64 {
        self.polar
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Display radius in pixels. Brighter (lower magnitude) stars are larger.
    #[must_use]
    pub fn radius(&self) -> f64 {
        POGSON_RATIO.powf(REFERENCE_MAGNITUDE - self.magnitude).powf(RADIUS_EXPONENT) * BASE_STAR_RADIUS_PX
    }

    pub(crate) fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_owned());
    }
}
