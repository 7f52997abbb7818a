//! Business value facade - the single entry point for external callers
//!
//! Global invariants enforced:
//! - Pure queries: identical inputs yield identical outputs
//! - Malformed ratings degrade to defaults; only malformed dimensions surface
//!   as errors (error string, empty list, or `DimensionParseError`)

use crate::aggregate::{overall_rating, AggregationMode};
use crate::catalog;
use crate::compliance::{compliance_status, ComplianceStatus};
use crate::cost::{classify, estimate_costs, CostEstimate, CostThresholds, SolutionScale};
use crate::impact::{self, BusinessImpact, ImplementationGuide};
use crate::posture::SecurityPosture;
use crate::rating::{Dimension, DimensionParseError, Rating};
use crate::risk::{risk_level_for, RiskLevel};
use crate::roi::{roi_for, RoiEstimate};
use crate::timeline::{estimate_timeline, ImplementationTimeline, TimelineSettings};
use serde::Serialize;

/// Returned verbatim by `detailed_description` for malformed input
pub const INVALID_SELECTION_MESSAGE: &str = "Invalid component or security level specified";

/// Tunable parameters of the engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineSettings {
    pub cost: CostThresholds,
    pub timeline: TimelineSettings,
}

/// Cost bundle, ROI, and classification for a posture
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMetrics {
    pub posture: SecurityPosture,
    pub aggregation: AggregationMode,
    pub overall_rating: Rating,
    pub risk_level: RiskLevel,
    pub costs: CostEstimate,
    pub roi: &'static RoiEstimate,
    pub scale: SolutionScale,
    pub classification: &'static str,
}

/// Narratives for one (dimension, rating) selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub description: &'static str,
    pub business_impact: BusinessImpact,
    pub technical_implementation: ImplementationGuide,
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessValueFacade {
    settings: EngineSettings,
}

impl BusinessValueFacade {
    pub fn new(settings: EngineSettings) -> Self {
        BusinessValueFacade { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Metrics with automatic aggregation
    pub fn security_metrics(
        &self,
        availability: Rating,
        integrity: Rating,
        confidentiality: Rating,
    ) -> SecurityMetrics {
        self.security_metrics_with_mode(
            &SecurityPosture::new(availability, integrity, confidentiality),
            AggregationMode::Auto,
        )
    }

    /// Metrics honouring the caller's aggregation mode
    ///
    /// Costs always follow the per-dimension ratings; the mode only decides
    /// the overall rating and therefore ROI and risk level.
    pub fn security_metrics_with_mode(
        &self,
        posture: &SecurityPosture,
        mode: AggregationMode,
    ) -> SecurityMetrics {
        let overall = overall_rating(posture, mode);
        let costs = estimate_costs(posture);
        let scale = classify(costs.capex_total, &self.settings.cost);

        SecurityMetrics {
            posture: *posture,
            aggregation: mode,
            overall_rating: overall,
            risk_level: risk_level_for(overall),
            costs,
            roi: roi_for(overall),
            scale,
            classification: scale.label(),
        }
    }

    /// Catalog description, or the literal error message for malformed input
    pub fn detailed_description(&self, dimension: &str, rating: &str) -> String {
        let Ok(dimension) = parse_dimension(dimension) else {
            return INVALID_SELECTION_MESSAGE.to_string();
        };
        match Rating::parse_lenient(rating) {
            Some(rating) => catalog::lookup(dimension, rating).description.to_string(),
            None => {
                tracing::debug!(input = rating, "unrecognized rating in description request");
                INVALID_SELECTION_MESSAGE.to_string()
            }
        }
    }

    /// Ordered recommendations; empty for anything unrecognized
    pub fn recommendations(&self, dimension: &str, rating: &str) -> Vec<&'static str> {
        match parse_dimension(dimension) {
            Ok(dimension) => catalog::resolve(dimension, rating).recommendations.to_vec(),
            Err(_) => Vec::new(),
        }
    }

    pub fn implementation_timeline(
        &self,
        availability: Rating,
        integrity: Rating,
        confidentiality: Rating,
    ) -> ImplementationTimeline {
        self.implementation_timeline_with_mode(
            &SecurityPosture::new(availability, integrity, confidentiality),
            AggregationMode::Auto,
        )
    }

    pub fn implementation_timeline_with_mode(
        &self,
        posture: &SecurityPosture,
        mode: AggregationMode,
    ) -> ImplementationTimeline {
        estimate_timeline(overall_rating(posture, mode), &self.settings.timeline)
    }

    pub fn business_impact(&self, dimension: Dimension, rating: Rating) -> BusinessImpact {
        impact::business_impact(dimension, rating)
    }

    pub fn technical_implementation(
        &self,
        dimension: Dimension,
        rating: Rating,
    ) -> ImplementationGuide {
        impact::technical_implementation(dimension, rating)
    }

    /// All narratives for an untyped selection
    ///
    /// A malformed rating degrades to the unknown record; a malformed
    /// dimension is an integration error and is returned as such.
    pub fn impact_report(
        &self,
        dimension: &str,
        rating: &str,
    ) -> Result<ImpactReport, DimensionParseError> {
        let dimension = parse_dimension(dimension)?;
        let detail = catalog::resolve(dimension, rating);
        Ok(ImpactReport {
            description: detail.description,
            business_impact: impact::resolve_business_impact(dimension, rating),
            technical_implementation: impact::resolve_technical_implementation(dimension, rating),
            recommendations: detail.recommendations,
        })
    }

    pub fn compliance_status(&self, posture: &SecurityPosture) -> ComplianceStatus {
        compliance_status(posture)
    }
}

fn parse_dimension(raw: &str) -> Result<Dimension, DimensionParseError> {
    raw.parse::<Dimension>().map_err(|e| {
        tracing::warn!(input = raw, "malformed dimension identifier");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facade() -> BusinessValueFacade {
        BusinessValueFacade::default()
    }

    #[test]
    fn test_security_metrics_bundle() {
        let metrics = facade().security_metrics(Rating::High, Rating::Moderate, Rating::High);
        assert_eq!(metrics.costs.capex_total, 75.0);
        assert_eq!(metrics.costs.opex_total, 50.0);
        assert_eq!(metrics.costs.three_year_tco, 225.0);
        // (3 + 2 + 3) / 3 = 2.67 -> High
        assert_eq!(metrics.overall_rating, Rating::High);
        assert_eq!(metrics.roi.return_rate_percent, "200-400%");
        assert_eq!(metrics.scale, SolutionScale::Comprehensive);
        assert_eq!(metrics.classification, "Comprehensive security implementation");
        assert_eq!(metrics.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_manual_mode_overrides_overall_but_not_costs() {
        let posture = SecurityPosture::uniform(Rating::Low);
        let pinned = facade()
            .security_metrics_with_mode(&posture, AggregationMode::Manual(Rating::VeryHigh));
        let auto = facade().security_metrics_with_mode(&posture, AggregationMode::Auto);
        assert_eq!(pinned.overall_rating, Rating::VeryHigh);
        assert_eq!(auto.overall_rating, Rating::Low);
        assert_eq!(pinned.costs, auto.costs);
        assert_eq!(pinned.roi.rating, Rating::VeryHigh);
    }

    #[test]
    fn test_classification_follows_settings() {
        let facade = BusinessValueFacade::new(EngineSettings {
            cost: CostThresholds {
                basic_capex_max: 100.0,
            },
            ..EngineSettings::default()
        });
        let metrics = facade.security_metrics(Rating::High, Rating::Moderate, Rating::High);
        assert_eq!(metrics.scale, SolutionScale::Basic);
    }

    #[test]
    fn test_detailed_description() {
        let description = facade().detailed_description("integrity", "High");
        assert_eq!(
            description,
            catalog::lookup(Dimension::Integrity, Rating::High).description
        );
    }

    #[test]
    fn test_detailed_description_invalid_input() {
        assert_eq!(
            facade().detailed_description("privacy", "High"),
            "Invalid component or security level specified"
        );
        assert_eq!(
            facade().detailed_description("availability", "Extreme"),
            INVALID_SELECTION_MESSAGE
        );
    }

    #[test]
    fn test_scattered_separators_are_not_ratings() {
        assert_eq!(
            facade().detailed_description("integrity", "h-i-g-h"),
            INVALID_SELECTION_MESSAGE
        );
        assert!(facade().recommendations("availability", "l o w").is_empty());
        let report = facade().impact_report("confidentiality", "n_o_n_e").unwrap();
        assert_eq!(report.business_impact.rating, None);
        assert_eq!(
            facade().detailed_description("integrity", "very_high"),
            catalog::lookup(Dimension::Integrity, Rating::VeryHigh).description
        );
    }

    #[test]
    fn test_recommendations() {
        let recs = facade().recommendations("confidentiality", "moderate");
        assert_eq!(
            recs.first(),
            Some(&"Enforce multi-factor authentication for privileged accounts")
        );
        assert!(facade().recommendations("confidentiality", "Extreme").is_empty());
        assert!(facade().recommendations("privacy", "High").is_empty());
        assert!(facade().recommendations("availability", "None").is_empty());
    }

    #[test]
    fn test_implementation_timeline_three_phases() {
        let timeline = facade().implementation_timeline(Rating::High, Rating::High, Rating::High);
        assert_eq!(timeline.total_weeks, 16);
        assert_eq!(timeline.phases.len(), 3);
    }

    #[test]
    fn test_impact_report() {
        let report = facade().impact_report("availability", "bogus").unwrap();
        assert_eq!(report.description, "Unknown");
        assert!(report.recommendations.is_empty());
        assert!(report.technical_implementation.dimension_specific.is_some());

        let err = facade().impact_report("privacy", "High").unwrap_err();
        assert_eq!(err.input, "privacy");
    }
}
