//! Security posture - the per-query rating triple

use crate::rating::{Dimension, Rating};
use serde::{Deserialize, Serialize};

/// Ratings for all three dimensions, supplied by the caller per query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPosture {
    pub availability: Rating,
    pub integrity: Rating,
    pub confidentiality: Rating,
}

impl SecurityPosture {
    pub fn new(availability: Rating, integrity: Rating, confidentiality: Rating) -> Self {
        SecurityPosture {
            availability,
            integrity,
            confidentiality,
        }
    }

    /// Same rating on every dimension
    pub fn uniform(rating: Rating) -> Self {
        SecurityPosture::new(rating, rating, rating)
    }

    /// Build from untyped strings; any unrecognized rating degrades to None
    pub fn from_raw(availability: &str, integrity: &str, confidentiality: &str) -> Self {
        SecurityPosture::new(
            degrade(availability),
            degrade(integrity),
            degrade(confidentiality),
        )
    }

    pub fn get(&self, dimension: Dimension) -> Rating {
        match dimension {
            Dimension::Availability => self.availability,
            Dimension::Integrity => self.integrity,
            Dimension::Confidentiality => self.confidentiality,
        }
    }

    /// Copy of this posture with one dimension replaced
    pub fn with(mut self, dimension: Dimension, rating: Rating) -> Self {
        match dimension {
            Dimension::Availability => self.availability = rating,
            Dimension::Integrity => self.integrity = rating,
            Dimension::Confidentiality => self.confidentiality = rating,
        }
        self
    }

    /// Ratings in fixed dimension order (availability, integrity, confidentiality)
    pub fn ratings(&self) -> [(Dimension, Rating); 3] {
        [
            (Dimension::Availability, self.availability),
            (Dimension::Integrity, self.integrity),
            (Dimension::Confidentiality, self.confidentiality),
        ]
    }

    /// Every one of the 125 possible postures, in ordinal order
    pub fn all() -> impl Iterator<Item = SecurityPosture> {
        Rating::ALL.into_iter().flat_map(|a| {
            Rating::ALL.into_iter().flat_map(move |i| {
                Rating::ALL
                    .into_iter()
                    .map(move |c| SecurityPosture::new(a, i, c))
            })
        })
    }
}

impl Default for SecurityPosture {
    fn default() -> Self {
        SecurityPosture::uniform(Rating::None)
    }
}

fn degrade(raw: &str) -> Rating {
    Rating::parse_lenient(raw).unwrap_or_else(|| {
        tracing::debug!(input = raw, "unrecognized rating, substituting None");
        Rating::None
    })
}
