//! Residual risk levels
//!
//! Global invariants enforced:
//! - Deterministic rating to risk mapping
//! - Monotonic: a stricter rating never yields a higher risk level

use crate::rating::Rating;
use serde::{Deserialize, Serialize};

/// Residual risk left by a given control rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Minimal,  // Very High
    Low,      // High
    Medium,   // Moderate
    High,     // Low
    Critical, // None
}

impl RiskLevel {
    /// Label used when a rating could not be resolved
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Minimal => "Minimal",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Assign the residual risk level for a rating
pub fn risk_level_for(rating: Rating) -> RiskLevel {
    match rating {
        Rating::None => RiskLevel::Critical,
        Rating::Low => RiskLevel::High,
        Rating::Moderate => RiskLevel::Medium,
        Rating::High => RiskLevel::Low,
        Rating::VeryHigh => RiskLevel::Minimal,
    }
}

/// Risk label for an optional rating; unresolved ratings read "Unknown"
pub fn risk_label(rating: Option<Rating>) -> &'static str {
    rating
        .map(|r| risk_level_for(r).as_str())
        .unwrap_or(RiskLevel::UNKNOWN)
}
