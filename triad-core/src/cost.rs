//! Cost estimation
//!
//! Costs are relative percentage points of an IT budget baseline, not currency.
//!
//! Global invariants enforced:
//! - Totals are plain sums of catalog contributions
//! - Raising any single rating never lowers capex, opex, or TCO
//! - Classification is narrative only; nothing branches on it

use crate::catalog;
use crate::posture::SecurityPosture;
use serde::{Deserialize, Serialize};

/// Years covered by the total cost of ownership figure
pub const TCO_YEARS: u32 = 3;

/// Cost bundle for a posture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub capex_total: f64,
    pub opex_total: f64,
    /// Share of first-year spend that is capital expenditure
    pub capex_percent_of_budget: f64,
    /// Share of first-year spend that is operating expenditure
    pub opex_percent_of_budget: f64,
    /// capex + 3 years of opex, no discounting
    pub three_year_tco: f64,
}

/// Configurable boundary between basic and comprehensive postures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostThresholds {
    /// Capex totals at or below this are basic
    pub basic_capex_max: f64,
}

impl Default for CostThresholds {
    fn default() -> Self {
        CostThresholds {
            basic_capex_max: 50.0,
        }
    }
}

/// Size classification of a posture's implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionScale {
    Basic,
    Comprehensive,
}

impl SolutionScale {
    pub fn label(&self) -> &'static str {
        match self {
            SolutionScale::Basic => "Small/basic security implementation",
            SolutionScale::Comprehensive => "Comprehensive security implementation",
        }
    }
}

/// Sum catalog cost contributions over the three dimensions
pub fn estimate_costs(posture: &SecurityPosture) -> CostEstimate {
    let (capex_total, opex_total) = posture
        .ratings()
        .into_iter()
        .map(|(dimension, rating)| catalog::lookup(dimension, rating))
        .fold((0.0, 0.0), |(capex, opex), detail| {
            (capex + detail.capex_percent, opex + detail.opex_percent)
        });

    let (capex_percent_of_budget, opex_percent_of_budget) =
        spend_split(capex_total, opex_total);

    CostEstimate {
        capex_total,
        opex_total,
        capex_percent_of_budget,
        opex_percent_of_budget,
        three_year_tco: capex_total + f64::from(TCO_YEARS) * opex_total,
    }
}

/// Whole-percent split of first-year spend; (0, 0) when nothing is spent
fn spend_split(capex: f64, opex: f64) -> (f64, f64) {
    let total = capex + opex;
    if total <= 0.0 {
        return (0.0, 0.0);
    }
    let capex_share = (capex / total * 100.0).round();
    (capex_share, 100.0 - capex_share)
}

/// Classify a capex total against the configured boundary
pub fn classify(capex_total: f64, thresholds: &CostThresholds) -> SolutionScale {
    if capex_total <= thresholds.basic_capex_max {
        SolutionScale::Basic
    } else {
        SolutionScale::Comprehensive
    }
}
