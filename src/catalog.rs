//! Constellation catalog: the JSON schema handed over by the page and its
//! validation into [`Constellation`]s.
//!
//! The catalog is a JSON object keyed by abbreviation:
//!
//! ```json
//! { "Cas": { "stars": [[0.04, 1.03, 2.2]], "lines": [], "name": "Cassiopeia",
//!            "abb": "Cas", "middle": 0, "bounds": [0.1, 0.1] } }
//! ```
//!
//! Star rows are `[azimuth, polar, magnitude]` in radians; `bounds` is the
//! `[azimuthal, polar]` half-extent used when the constellation is focused.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constellation::{Constellation, HalfExtent};
use crate::star::Star;

/// Error returned when a catalog cannot be turned into constellations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The input was not valid catalog JSON.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An entry has no `middle` star index.
    #[error("{abbreviation}: missing `middle`")]
    MissingMiddle { abbreviation: String },
    /// An entry has no `bounds` half-extent.
    #[error("{abbreviation}: missing `bounds`")]
    MissingBounds { abbreviation: String },
    /// `middle` does not index a star.
    #[error("{abbreviation}: middle star {index} out of range ({star_count} stars)")]
    MiddleOutOfRange { abbreviation: String, index: usize, star_count: usize },
    /// A line endpoint does not index a star.
    #[error("{abbreviation}: line {line} ({from}, {to}) out of range ({star_count} stars)")]
    LineOutOfRange { abbreviation: String, line: usize, from: usize, to: usize, star_count: usize },
    /// Neither the requested focus nor the fallback is in the catalog.
    #[error("focus {requested:?} not in catalog and fallback {fallback:?} missing too")]
    FocusUnavailable { requested: String, fallback: String },
}

/// One catalog entry as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationRecord {
    pub stars: Vec<[f64; 3]>,
    pub lines: Vec<[usize; 2]>,
    pub name: String,
    pub abb: String,
    pub middle: Option<usize>,
    pub bounds: Option<[f64; 2]>,
}

impl TryFrom<ConstellationRecord> for Constellation {
    type Error = CatalogError;

    fn try_from(record: ConstellationRecord) -> Result<Self, Self::Error> {
        let Some(middle) = record.middle else {
            return Err(CatalogError::MissingMiddle { abbreviation: record.abb });
        };
        let Some([azimuth, polar]) = record.bounds else {
            return Err(CatalogError::MissingBounds { abbreviation: record.abb });
        };
        let stars = record.stars.iter().map(|&[az, pol, mag]| Star::new(az, pol, mag)).collect();
        let lines = record.lines.iter().map(|&[a, b]| (a, b)).collect();
        Constellation::new(stars, lines, record.name, record.abb, middle, HalfExtent { azimuth, polar })
    }
}

/// Validated constellations keyed by abbreviation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    constellations: BTreeMap<String, Constellation>,
}

impl Catalog {
    /// Parse and validate a catalog JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for malformed JSON or the first invalid entry.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: BTreeMap<String, ConstellationRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Validate already-deserialized records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for the first invalid entry.
    pub fn from_records(records: BTreeMap<String, ConstellationRecord>) -> Result<Self, CatalogError> {
        let mut constellations = BTreeMap::new();
        for (key, record) in records {
            if key != record.abb {
                tracing::warn!(key = %key, abb = %record.abb, "catalog key differs from entry abbreviation");
            }
            constellations.insert(key, Constellation::try_from(record)?);
        }
        tracing::debug!(count = constellations.len(), "catalog loaded");
        Ok(Self { constellations })
    }

    #[must_use]
    pub fn get(&self, abbreviation: &str) -> Option<&Constellation> {
        self.constellations.get(abbreviation)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }

    /// Constellations in abbreviation order.
    pub fn iter(&self) -> impl Iterator<Item = &Constellation> {
        self.constellations.values()
    }

    /// The requested focus, or `fallback` when it is not in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FocusUnavailable`] only when `fallback` is missing too.
    pub fn resolve_focus(&self, requested: &str, fallback: &str) -> Result<&Constellation, CatalogError> {
        if let Some(found) = self.get(requested) {
            return Ok(found);
        }
        tracing::debug!(requested, fallback, "focus not in catalog, using fallback");
        self.get(fallback).ok_or_else(|| CatalogError::FocusUnavailable {
            requested: requested.to_owned(),
            fallback: fallback.to_owned(),
        })
    }

    /// Consume the catalog, yielding constellations in abbreviation order.
    #[must_use]
    pub fn into_constellations(self) -> Vec<Constellation> {
        self.constellations.into_values().collect()
    }
}
