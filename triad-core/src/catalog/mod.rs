//! Control catalog - static detail records keyed by (dimension, rating)
//!
//! Global invariants enforced:
//! - Exactly 15 records, one per (dimension, rating) pair
//! - Tables are compile-time statics; no mutation API exists
//! - Unknown ratings resolve to a per-dimension sentinel record (zeros,
//!   "Unknown" text, empty lists), never to an error

mod availability;
mod confidentiality;
mod integrity;

use crate::rating::{Dimension, Rating};
use serde::Serialize;

/// Text used by sentinel records for every narrative field
pub const UNKNOWN_TEXT: &str = "Unknown";

/// Business impact category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactCategory {
    Financial,
    Operational,
    Regulatory,
    Reputational,
    Strategic,
}

impl ImpactCategory {
    pub const ALL: [ImpactCategory; 5] = [
        ImpactCategory::Financial,
        ImpactCategory::Operational,
        ImpactCategory::Regulatory,
        ImpactCategory::Reputational,
        ImpactCategory::Strategic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactCategory::Financial => "financial",
            ImpactCategory::Operational => "operational",
            ImpactCategory::Regulatory => "regulatory",
            ImpactCategory::Reputational => "reputational",
            ImpactCategory::Strategic => "strategic",
        }
    }
}

/// Impact of a rating within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDetail {
    pub description: &'static str,
    pub risk_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_revenue_loss: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_time_to_recover: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_violations: Option<&'static [&'static str]>,
}

impl ImpactDetail {
    /// Placeholder for a category the catalog does not describe
    pub const fn unspecified(category: ImpactCategory) -> ImpactDetail {
        let description = match category {
            ImpactCategory::Financial => "Financial impact not specified",
            ImpactCategory::Operational => "Operational impact not specified",
            ImpactCategory::Regulatory => "Regulatory impact not specified",
            ImpactCategory::Reputational => "Reputational impact not specified",
            ImpactCategory::Strategic => "Strategic impact not specified",
        };
        ImpactDetail::text(description, UNKNOWN_TEXT)
    }

    pub(crate) const fn text(description: &'static str, risk_level: &'static str) -> ImpactDetail {
        ImpactDetail {
            description,
            risk_level,
            annual_revenue_loss: None,
            mean_time_to_recover: None,
            compliance_violations: None,
        }
    }
}

/// Per-category breakdown; financial and operational are always described
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactBreakdown {
    pub financial: ImpactDetail,
    pub operational: ImpactDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory: Option<ImpactDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputational: Option<ImpactDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic: Option<ImpactDetail>,
}

impl ImpactBreakdown {
    pub fn get(&self, category: ImpactCategory) -> Option<&ImpactDetail> {
        match category {
            ImpactCategory::Financial => Some(&self.financial),
            ImpactCategory::Operational => Some(&self.operational),
            ImpactCategory::Regulatory => self.regulatory.as_ref(),
            ImpactCategory::Reputational => self.reputational.as_ref(),
            ImpactCategory::Strategic => self.strategic.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplementationEffort {
    pub development: &'static str,
    pub maintenance: &'static str,
    pub expertise: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicalImplementation {
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub effort: ImplementationEffort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityTargets {
    pub uptime_target: &'static str,
    pub rto: &'static str,
    pub rpo: &'static str,
    pub mttr: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityControls {
    pub validation_method: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidentialityControls {
    pub protection_method: &'static str,
}

/// Fields that only exist for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DimensionSpecifics {
    Availability(AvailabilityTargets),
    Integrity(IntegrityControls),
    Confidentiality(ConfidentialityControls),
}

impl DimensionSpecifics {
    pub fn dimension(&self) -> Dimension {
        match self {
            DimensionSpecifics::Availability(_) => Dimension::Availability,
            DimensionSpecifics::Integrity(_) => Dimension::Integrity,
            DimensionSpecifics::Confidentiality(_) => Dimension::Confidentiality,
        }
    }
}

/// Full detail record for one (dimension, rating) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlDetail {
    pub dimension: Dimension,
    /// None only on sentinel records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub description: &'static str,
    pub technical: &'static str,
    pub business_impact: &'static str,
    pub capex_percent: f64,
    pub opex_percent: f64,
    pub recommendations: &'static [&'static str],
    pub value_points: &'static [&'static str],
    pub business_impact_breakdown: ImpactBreakdown,
    pub technical_implementation: TechnicalImplementation,
    #[serde(flatten)]
    pub specifics: DimensionSpecifics,
}

impl ControlDetail {
    pub fn is_sentinel(&self) -> bool {
        self.rating.is_none()
    }
}

/// Look up the record for a valid (dimension, rating) pair
pub fn lookup(dimension: Dimension, rating: Rating) -> &'static ControlDetail {
    let table = match dimension {
        Dimension::Availability => &availability::CONTROLS,
        Dimension::Integrity => &integrity::CONTROLS,
        Dimension::Confidentiality => &confidentiality::CONTROLS,
    };
    &table[usize::from(rating.ordinal())]
}

/// Sentinel record for a dimension whose rating could not be resolved
pub fn unknown(dimension: Dimension) -> &'static ControlDetail {
    match dimension {
        Dimension::Availability => &availability::UNKNOWN,
        Dimension::Integrity => &integrity::UNKNOWN,
        Dimension::Confidentiality => &confidentiality::UNKNOWN,
    }
}

/// Resolve-with-default: look up an untyped rating, degrading to the sentinel
///
/// Every consumer that starts from an untyped rating goes through here so
/// fallback semantics are shared.
pub fn resolve(dimension: Dimension, raw_rating: &str) -> &'static ControlDetail {
    match Rating::parse_lenient(raw_rating) {
        Some(rating) => lookup(dimension, rating),
        None => {
            tracing::debug!(
                dimension = dimension.as_str(),
                input = raw_rating,
                "unrecognized rating, using unknown control record"
            );
            unknown(dimension)
        }
    }
}

/// Iterate over all 15 catalog records in (dimension, rating) order
pub fn records() -> impl Iterator<Item = &'static ControlDetail> {
    Dimension::ALL
        .into_iter()
        .flat_map(|d| Rating::ALL.into_iter().map(move |r| lookup(d, r)))
}

/// Build a sentinel record; shared by the per-dimension data modules
pub(crate) const fn sentinel(dimension: Dimension, specifics: DimensionSpecifics) -> ControlDetail {
    ControlDetail {
        dimension,
        rating: None,
        description: UNKNOWN_TEXT,
        technical: UNKNOWN_TEXT,
        business_impact: UNKNOWN_TEXT,
        capex_percent: 0.0,
        opex_percent: 0.0,
        recommendations: &[],
        value_points: &[],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail::unspecified(ImpactCategory::Financial),
            operational: ImpactDetail::unspecified(ImpactCategory::Operational),
            regulatory: None,
            reputational: None,
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: UNKNOWN_TEXT,
            steps: &[],
            effort: ImplementationEffort {
                development: UNKNOWN_TEXT,
                maintenance: UNKNOWN_TEXT,
                expertise: UNKNOWN_TEXT,
            },
        },
        specifics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::risk_level_for;

    #[test]
    fn test_exactly_fifteen_records_keyed_correctly() {
        let all: Vec<_> = records().collect();
        assert_eq!(all.len(), 15);
        for dimension in Dimension::ALL {
            for rating in Rating::ALL {
                let detail = lookup(dimension, rating);
                assert_eq!(detail.dimension, dimension);
                assert_eq!(detail.rating, Some(rating));
                assert_eq!(detail.specifics.dimension(), dimension);
            }
        }
    }

    #[test]
    fn test_records_fully_populated() {
        for detail in records() {
            let key = format!("{}/{:?}", detail.dimension, detail.rating);
            assert!(!detail.description.is_empty(), "{key}: description");
            assert!(!detail.technical.is_empty(), "{key}: technical");
            assert!(!detail.business_impact.is_empty(), "{key}: business impact");
            assert!(!detail.value_points.is_empty(), "{key}: value points");
            assert!(
                !detail.technical_implementation.steps.is_empty(),
                "{key}: steps"
            );
            assert!((0.0..=100.0).contains(&detail.capex_percent), "{key}: capex");
            assert!((0.0..=100.0).contains(&detail.opex_percent), "{key}: opex");
        }
    }

    #[test]
    fn test_recommendations_empty_only_at_none() {
        for detail in records() {
            if detail.rating != Some(Rating::None) {
                assert!(
                    !detail.recommendations.is_empty(),
                    "{}/{:?} has no recommendations",
                    detail.dimension,
                    detail.rating
                );
            }
        }
    }

    #[test]
    fn test_costs_non_decreasing_with_rating() {
        for dimension in Dimension::ALL {
            for pair in Rating::ALL.windows(2) {
                let lower = lookup(dimension, pair[0]);
                let higher = lookup(dimension, pair[1]);
                assert!(higher.capex_percent >= lower.capex_percent);
                assert!(higher.opex_percent >= lower.opex_percent);
            }
        }
    }

    #[test]
    fn test_financial_risk_matches_rating() {
        for detail in records() {
            let rating = detail.rating.expect("catalog records carry a rating");
            assert_eq!(
                detail.business_impact_breakdown.financial.risk_level,
                risk_level_for(rating).as_str()
            );
        }
    }

    #[test]
    fn test_resolve_unknown_rating_degrades() {
        let detail = resolve(Dimension::Integrity, "Extreme");
        assert!(detail.is_sentinel());
        assert_eq!(detail.dimension, Dimension::Integrity);
        assert_eq!(detail.description, UNKNOWN_TEXT);
        assert_eq!(detail.capex_percent, 0.0);
        assert_eq!(detail.opex_percent, 0.0);
        assert!(detail.recommendations.is_empty());
        assert!(detail.value_points.is_empty());
    }

    #[test]
    fn test_resolve_known_rating() {
        let detail = resolve(Dimension::Availability, "very high");
        assert_eq!(detail, lookup(Dimension::Availability, Rating::VeryHigh));
    }

    #[test]
    fn test_specifics_flatten_into_record() {
        let json = serde_json::to_value(lookup(Dimension::Availability, Rating::High)).unwrap();
        assert_eq!(json["uptimeTarget"], "99.9%");
        assert!(json.get("validationMethod").is_none());

        let json = serde_json::to_value(lookup(Dimension::Integrity, Rating::High)).unwrap();
        assert!(json.get("rto").is_none());
        assert!(json["validationMethod"].is_string());
    }
}
