//! Conversions between spherical sky coordinates and cartesian vectors.
//!
//! Axes: azimuth 0 points along +y, azimuth increases toward +x, and the
//! polar axis is +z. The two conversions below are exact inverses of each
//! other over the whole sphere.

#[cfg(test)]
#[path = "sphere_test.rs"]
mod sphere_test;

/// A point in spherical form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    /// In `(-π, π]`.
    pub azimuth: f64,
    /// In `[-π/2, π/2]`.
    pub polar: f64,
}

/// Cartesian `[x, y, z]` of the point at `(radius, azimuth, polar)`.
#[must_use]
pub fn sphere_to_cartesian(radius: f64, azimuth: f64, polar: f64) -> [f64; 3] {
    let (sin_az, cos_az) = azimuth.sin_cos();
    let (sin_pol, cos_pol) = polar.sin_cos();
    [radius * cos_pol * sin_az, radius * cos_pol * cos_az, radius * sin_pol]
}

/// Spherical form of `[x, y, z]`.
///
/// Azimuth uses the four-quadrant arctangent, so vectors with `y < 0` keep
/// their true azimuth instead of aliasing onto the `y > 0` half. The zero
/// vector maps to all zeros.
#[must_use]
pub fn cartesian_to_sphere([x, y, z]: [f64; 3]) -> Spherical {
    let radius = (x * x + y * y + z * z).sqrt();
    if radius <= 0.0 {
        return Spherical { radius, azimuth: 0.0, polar: 0.0 };
    }
    Spherical { radius, azimuth: x.atan2(y), polar: (z / radius).clamp(-1.0, 1.0).asin() }
}
