//! Constellations: a small graph of stars with a label anchor and angular extent.

#[cfg(test)]
#[path = "constellation_test.rs"]
mod constellation_test;

use crate::catalog::CatalogError;
use crate::render::SkyPainter;
use crate::star::Star;
use crate::surface::{Surface, SurfaceError};

/// Angular half-size of a constellation's bounding box, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfExtent {
    pub azimuth: f64,
    pub polar: f64,
}

impl From<(f64, f64)> for HalfExtent {
    fn from((azimuth, polar): (f64, f64)) -> Self {
        Self { azimuth, polar }
    }
}

/// A named set of stars joined by line segments.
///
/// Line endpoints and the middle star are indices into `stars`, validated at
/// construction. The middle star carries the constellation's name as its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    stars: Vec<Star>,
    lines: Vec<(usize, usize)>,
    name: String,
    abbreviation: String,
    middle_index: usize,
    half_extent: HalfExtent,
}

impl Constellation {
    /// Build a constellation, labelling its middle star with `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MiddleOutOfRange`] or [`CatalogError::LineOutOfRange`]
    /// when an index does not refer to a star.
    pub fn new(
        stars: Vec<Star>,
        lines: Vec<(usize, usize)>,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        middle_index: usize,
        half_extent: impl Into<HalfExtent>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let abbreviation = abbreviation.into();
        let star_count = stars.len();

        if middle_index >= star_count {
            return Err(CatalogError::MiddleOutOfRange { abbreviation, index: middle_index, star_count });
        }
        if let Some((line, &(a, b))) = lines
            .iter()
            .enumerate()
            .find(|(_, (a, b))| *a >= star_count || *b >= star_count)
        {
            return Err(CatalogError::LineOutOfRange { abbreviation, line, from: a, to: b, star_count });
        }

        let mut stars = stars;
        stars[middle_index].set_label(&name);

        Ok(Self { stars, lines, name, abbreviation, middle_index, half_extent: half_extent.into() })
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn lines(&self) -> &[(usize, usize)] {
        &self.lines
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    #[must_use]
    pub fn middle_index(&self) -> usize {
        self.middle_index
    }

    /// The label anchor and default focus target.
    #[must_use]
    pub fn middle_star(&self) -> &Star {
        &self.stars[self.middle_index]
    }

    #[must_use]
    pub fn half_extent(&self) -> HalfExtent {
        self.half_extent
    }

    /// Draw stars (with labels) first, then the connecting lines.
    ///
    /// Line width grows with the brightness of both endpoints.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SurfaceError`] from the painter.
    pub fn draw<S: Surface>(&self, painter: &mut SkyPainter<'_, S>) -> Result<(), SurfaceError> {
        for star in &self.stars {
            painter.draw_point(star.azimuth(), star.polar(), star.radius())?;
            if let Some(label) = star.label() {
                painter.draw_label(star.azimuth(), star.polar(), label)?;
            }
        }
        for &(a, b) in &self.lines {
            let (from, to) = (&self.stars[a], &self.stars[b]);
            let width = (from.radius() + to.radius()) / 4.0;
            painter.draw_line(from.azimuth(), from.polar(), to.azimuth(), to.polar(), width)?;
        }
        Ok(())
    }
}
