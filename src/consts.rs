//! Shared numeric constants for the star map engine.

use std::f64::consts::{FRAC_PI_2, PI};

// ── Field of view ───────────────────────────────────────────────

/// Narrowest allowed polar half-angle (9°).
pub const MIN_FOV_POLAR: f64 = PI / 20.0;

/// Widest allowed polar half-angle (50°).
pub const MAX_FOV_POLAR: f64 = 5.0 * PI / 18.0;

/// Polar half-angle used when no focus supplies one (15°).
pub const DEFAULT_FOV_POLAR: f64 = PI / 12.0;

/// Camera polar orientation is clamped to ± this value.
pub const MAX_ORIENTATION_POLAR: f64 = FRAC_PI_2;

// ── Interaction ─────────────────────────────────────────────────

/// Pixel deltas are converted to angles at twice the per-pixel FOV rate.
pub const PAN_GAIN: f64 = 2.0;

/// Fractional FOV change per unit of zoom speed.
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom speed applied per wheel event.
pub const WHEEL_ZOOM_SPEED: f64 = 0.3;

/// Zoom speed applied per `+` / `-` key press.
pub const KEY_ZOOM_SPEED: f64 = 1.0;

/// Angular step for arrow keys (10°).
pub const KEY_STEP: f64 = 10.0 * PI / 180.0;

/// Single-finger touch drags pan at this multiple of the pointer rate.
pub const TOUCH_PAN_SCALE: f64 = 2.0;

/// Margin added around a focus constellation's bounds (2°).
pub const FOCUS_MARGIN: f64 = 2.0 * PI / 180.0;

/// Catalog abbreviation used when the requested focus is missing.
pub const DEFAULT_FOCUS: &str = "Ori";

// ── Rendering ───────────────────────────────────────────────────

/// Display radius, in pixels, of a magnitude 3.63 star.
pub const BASE_STAR_RADIUS_PX: f64 = 4.0;

/// Magnitude at which a star is drawn with [`BASE_STAR_RADIUS_PX`].
pub const REFERENCE_MAGNITUDE: f64 = 3.63;

/// Pogson ratio: brightness factor between successive magnitudes.
pub const POGSON_RATIO: f64 = 2.512;

/// Exponent compressing brightness into a display radius.
pub const RADIUS_EXPONENT: f64 = 0.125;

/// Label text is drawn this many pixels right of and below its star.
pub const LABEL_OFFSET_PX: f64 = 20.0;

/// Font used for constellation labels.
pub const LABEL_FONT: &str = "18px Montserrat";

/// Fill and stroke color for every primitive.
pub const INK: &str = "#ffffff";
