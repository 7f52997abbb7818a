//! Return-on-investment estimates per rating
//!
//! Global invariants enforced:
//! - The lower bound of the return rate never decreases as the rating rises
//! - Unresolvable keys fall back to the Moderate estimate

use crate::aggregate::aggregate;
use crate::rating::Rating;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub rating: Rating,
    /// Range such as "100-200%", or a single value such as "0%"
    pub return_rate_percent: &'static str,
    pub description: &'static str,
    pub potential_savings: &'static str,
    pub break_even_period: &'static str,
}

impl RoiEstimate {
    /// Lower bound of `return_rate_percent`, in percent
    pub fn lower_bound_percent(&self) -> u32 {
        parse_lower_bound(self.return_rate_percent)
    }
}

/// Rating the fallback estimate belongs to
pub const FALLBACK_RATING: Rating = Rating::Moderate;

static ROI_TABLE: [RoiEstimate; 5] = [
    RoiEstimate {
        rating: Rating::None,
        return_rate_percent: "0%",
        description: "No security investment means no return; all incident costs are borne in full.",
        potential_savings: "None",
        break_even_period: "Not applicable",
    },
    RoiEstimate {
        rating: Rating::Low,
        return_rate_percent: "50-100%",
        description: "Basic controls prevent the most common, low-effort incidents.",
        potential_savings: "Avoids routine outages and opportunistic breaches",
        break_even_period: "12-24 months",
    },
    RoiEstimate {
        rating: Rating::Moderate,
        return_rate_percent: "100-200%",
        description: "Standard controls reduce both incident frequency and recovery cost.",
        potential_savings: "Significant reduction in incident-related losses",
        break_even_period: "6-12 months",
    },
    RoiEstimate {
        rating: Rating::High,
        return_rate_percent: "200-400%",
        description: "Strong controls protect revenue streams and unlock regulated markets.",
        potential_savings: "Large reduction in breach and downtime costs plus new business opportunities",
        break_even_period: "3-6 months",
    },
    RoiEstimate {
        rating: Rating::VeryHigh,
        return_rate_percent: "400-800%",
        description: "Maximum controls protect mission-critical operations where incidents are catastrophic.",
        potential_savings: "Avoids catastrophic losses and regulatory penalties",
        break_even_period: "1-3 months",
    },
];

/// ROI estimate for a rating
pub fn roi_for(rating: Rating) -> &'static RoiEstimate {
    &ROI_TABLE[usize::from(rating.ordinal())]
}

/// Resolve-with-default for untyped keys: unknown ratings get the Moderate estimate
pub fn resolve_roi(raw_rating: &str) -> &'static RoiEstimate {
    match Rating::parse_lenient(raw_rating) {
        Some(rating) => roi_for(rating),
        None => {
            tracing::debug!(
                input = raw_rating,
                "unrecognized rating, using fallback ROI estimate"
            );
            roi_for(FALLBACK_RATING)
        }
    }
}

/// ROI for the aggregate of three ratings
pub fn roi_for_posture(
    availability: Rating,
    integrity: Rating,
    confidentiality: Rating,
) -> &'static RoiEstimate {
    roi_for(aggregate(availability, integrity, confidentiality))
}

/// Leading integer of a percent string ("100-200%" -> 100); 0 if absent
fn parse_lower_bound(rate: &str) -> u32 {
    let digits: String = rate
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
