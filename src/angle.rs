//! Angle reduction on the circle group.
//!
//! Every stored orientation or sky angle passes through one of these two
//! reductions before it outlives the computation that produced it.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::{PI, TAU};

/// Reduce `theta` into `[0, 2π)`.
///
/// Negative inputs are lifted by whole turns in one step rather than by a
/// single subtraction, so inputs many turns below zero reduce exactly like
/// their positive counterparts. Non-finite inputs yield NaN.
#[must_use]
pub fn positive_angle(theta: f64) -> f64 {
    if !theta.is_finite() {
        return f64::NAN;
    }
    let reduced = theta.rem_euclid(TAU);
    // Tiny negative inputs round up to a full turn.
    if reduced >= TAU { 0.0 } else { reduced }
}

/// Reduce `theta` into `(-π, π]`.
#[must_use]
pub fn small_angle(theta: f64) -> f64 {
    let theta = positive_angle(theta);
    if theta > PI { theta - TAU } else { theta }
}
