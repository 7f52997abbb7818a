//! Overall rating rollup
//!
//! Global invariants enforced:
//! - Commutative: permuting the three inputs never changes the result
//! - Monotonic: raising any one input never lowers the result
//! - Manual mode is caller state; the engine holds none

use crate::posture::SecurityPosture;
use crate::rating::Rating;
use serde::{Deserialize, Serialize};

/// Caller-held aggregation mode
///
/// `Manual` pins the overall rating until the caller switches back to
/// `Auto`. The engine only reads this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "rating", rename_all = "lowercase")]
pub enum AggregationMode {
    #[default]
    Auto,
    Manual(Rating),
}

impl AggregationMode {
    /// Pin an explicit overall rating
    pub const fn manual(rating: Rating) -> Self {
        AggregationMode::Manual(rating)
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, AggregationMode::Manual(_))
    }
}

/// Roll three ratings up into one
///
/// Mean of the ordinals, rounded half-up toward the stricter rating.
/// `(2 * sum + 3) / 6` is `floor(sum / 3 + 1/2)` in integer arithmetic.
pub fn aggregate(availability: Rating, integrity: Rating, confidentiality: Rating) -> Rating {
    let sum = u32::from(availability.ordinal())
        + u32::from(integrity.ordinal())
        + u32::from(confidentiality.ordinal());
    let rounded = (2 * sum + 3) / 6;
    Rating::from_ordinal(i64::from(rounded))
}

pub fn aggregate_posture(posture: &SecurityPosture) -> Rating {
    aggregate(
        posture.availability,
        posture.integrity,
        posture.confidentiality,
    )
}

/// Overall rating honouring the caller's mode
pub fn overall_rating(posture: &SecurityPosture, mode: AggregationMode) -> Rating {
    match mode {
        AggregationMode::Auto => aggregate_posture(posture),
        AggregationMode::Manual(pinned) => pinned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rating::*;

    #[test]
    fn test_uniform_inputs() {
        for rating in Rating::ALL {
            assert_eq!(aggregate(rating, rating, rating), rating);
        }
    }

    #[test]
    fn test_mean_rounding() {
        // (3 + 2 + 1) / 3 = 2.0
        assert_eq!(aggregate(High, Moderate, Low), Moderate);
        // (4 + 4 + 0) / 3 = 2.67 -> 3
        assert_eq!(aggregate(VeryHigh, VeryHigh, None), High);
        // (1 + 0 + 0) / 3 = 0.33 -> 0
        assert_eq!(aggregate(Low, None, None), None);
        // (1 + 1 + 0) / 3 = 0.67 -> 1
        assert_eq!(aggregate(Low, Low, None), Low);
        // (4 + 0 + 0) / 3 = 1.33 -> 1
        assert_eq!(aggregate(VeryHigh, None, None), Low);
    }

    #[test]
    fn test_manual_mode_pins_result() {
        let posture = SecurityPosture::uniform(Low);
        let mode = AggregationMode::manual(VeryHigh);
        assert!(mode.is_manual());
        assert!(!AggregationMode::default().is_manual());
        assert_eq!(overall_rating(&posture, mode), VeryHigh);
        // Changing inputs does not recompute while pinned
        let raised = SecurityPosture::uniform(High);
        assert_eq!(overall_rating(&raised, mode), VeryHigh);
        assert_eq!(overall_rating(&raised, AggregationMode::Auto), High);
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&AggregationMode::Auto).unwrap(),
            r#"{"mode":"auto"}"#
        );
        assert_eq!(
            serde_json::to_string(&AggregationMode::Manual(High)).unwrap(),
            r#"{"mode":"manual","rating":"High"}"#
        );
    }
}
