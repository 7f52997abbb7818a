//! Rating scale and security dimensions
//!
//! Global invariants enforced:
//! - Ratings are totally ordered by ordinal (None < Low < Moderate < High < VeryHigh)
//! - Ordinal conversion never fails; out-of-range input clamps to None
//! - Exactly three dimensions exist

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Control-maturity rating for a single dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    None,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// One of the three CIA dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Availability,
    Integrity,
    Confidentiality,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized security rating: {input:?}")]
pub struct RatingParseError {
    pub input: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized security dimension: {input:?}")]
pub struct DimensionParseError {
    pub input: String,
}

impl Rating {
    /// All ratings in ascending order
    pub const ALL: [Rating; 5] = [
        Rating::None,
        Rating::Low,
        Rating::Moderate,
        Rating::High,
        Rating::VeryHigh,
    ];

    pub const MAX_ORDINAL: u8 = 4;

    pub fn ordinal(self) -> u8 {
        match self {
            Rating::None => 0,
            Rating::Low => 1,
            Rating::Moderate => 2,
            Rating::High => 3,
            Rating::VeryHigh => 4,
        }
    }

    /// Convert an ordinal back to a rating; anything outside 0..=4 is None
    pub fn from_ordinal(n: i64) -> Rating {
        match n {
            1 => Rating::Low,
            2 => Rating::Moderate,
            3 => Rating::High,
            4 => Rating::VeryHigh,
            _ => Rating::None,
        }
    }

    /// Convert an untyped number to a rating
    ///
    /// NaN, infinities, negatives, fractional values, and values above 4
    /// all clamp to None.
    pub fn from_ordinal_f64(n: f64) -> Rating {
        let in_range = (0.0..=f64::from(Self::MAX_ORDINAL)).contains(&n);
        if !in_range || n.fract() != 0.0 {
            return Rating::None;
        }
        Rating::from_ordinal(n as i64)
    }

    /// Three-way comparison by ordinal: -1, 0, or 1
    pub fn compare(a: Rating, b: Rating) -> i8 {
        match a.ordinal().cmp(&b.ordinal()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Lenient parse for untyped boundaries: unknown input yields None
    pub fn parse_lenient(raw: &str) -> Option<Rating> {
        raw.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::None => "None",
            Rating::Low => "Low",
            Rating::Moderate => "Moderate",
            Rating::High => "High",
            Rating::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = RatingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Rating::None),
            "low" => Ok(Rating::Low),
            "moderate" => Ok(Rating::Moderate),
            "high" => Ok(Rating::High),
            "very high" | "veryhigh" | "very-high" | "very_high" => Ok(Rating::VeryHigh),
            _ => Err(RatingParseError {
                input: s.to_string(),
            }),
        }
    }
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Availability,
        Dimension::Integrity,
        Dimension::Confidentiality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Availability => "availability",
            Dimension::Integrity => "integrity",
            Dimension::Confidentiality => "confidentiality",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Availability => "Availability",
            Dimension::Integrity => "Integrity",
            Dimension::Confidentiality => "Confidentiality",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = DimensionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "availability" => Ok(Dimension::Availability),
            "integrity" => Ok(Dimension::Integrity),
            "confidentiality" => Ok(Dimension::Confidentiality),
            _ => Err(DimensionParseError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_round_trip() {
        for rating in Rating::ALL {
            assert_eq!(Rating::from_ordinal(rating.ordinal() as i64), rating);
        }
    }

    #[test]
    fn test_from_ordinal_out_of_range_is_none() {
        assert_eq!(Rating::from_ordinal(-1), Rating::None);
        assert_eq!(Rating::from_ordinal(5), Rating::None);
        assert_eq!(Rating::from_ordinal(i64::MAX), Rating::None);
    }

    #[test]
    fn test_from_ordinal_f64_degenerate_inputs() {
        assert_eq!(Rating::from_ordinal_f64(f64::NAN), Rating::None);
        assert_eq!(Rating::from_ordinal_f64(f64::INFINITY), Rating::None);
        assert_eq!(Rating::from_ordinal_f64(-1.0), Rating::None);
        assert_eq!(Rating::from_ordinal_f64(2.5), Rating::None);
        assert_eq!(Rating::from_ordinal_f64(4.0), Rating::VeryHigh);
        assert_eq!(Rating::from_ordinal_f64(3.0), Rating::High);
    }

    #[test]
    fn test_compare() {
        assert_eq!(Rating::compare(Rating::Low, Rating::High), -1);
        assert_eq!(Rating::compare(Rating::High, Rating::High), 0);
        assert_eq!(Rating::compare(Rating::VeryHigh, Rating::None), 1);
    }

    #[test]
    fn test_ordering_matches_ordinal() {
        for pair in Rating::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
    }

    #[test]
    fn test_parse_accepts_display_and_variants() {
        assert_eq!("Very High".parse::<Rating>(), Ok(Rating::VeryHigh));
        assert_eq!("veryhigh".parse::<Rating>(), Ok(Rating::VeryHigh));
        assert_eq!("very-high".parse::<Rating>(), Ok(Rating::VeryHigh));
        assert_eq!(" MODERATE ".parse::<Rating>(), Ok(Rating::Moderate));
        assert!("Extreme".parse::<Rating>().is_err());
        assert!("".parse::<Rating>().is_err());
    }

    #[test]
    fn test_parse_rejects_separators_inside_words() {
        assert!("hi-gh".parse::<Rating>().is_err());
        assert!("l o w".parse::<Rating>().is_err());
        assert!("n_o_n_e".parse::<Rating>().is_err());
        assert!("MOD-ER_ATE".parse::<Rating>().is_err());
        assert!("very  high".parse::<Rating>().is_err());
        assert_eq!("Very_High".parse::<Rating>(), Ok(Rating::VeryHigh));
        assert_eq!(Rating::parse_lenient("h-i-g-h"), None);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Rating::parse_lenient("low"), Some(Rating::Low));
        assert_eq!(Rating::parse_lenient("undefined"), None);
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!(
            "Availability".parse::<Dimension>(),
            Ok(Dimension::Availability)
        );
        assert_eq!(" integrity".parse::<Dimension>(), Ok(Dimension::Integrity));
        let err = "privacy".parse::<Dimension>().unwrap_err();
        assert_eq!(err.input, "privacy");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Rating::VeryHigh).unwrap(),
            "\"Very High\""
        );
        assert_eq!(
            serde_json::to_string(&Dimension::Confidentiality).unwrap(),
            "\"confidentiality\""
        );
    }
}
