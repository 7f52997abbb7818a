//! Business-impact and technical-implementation narratives
//!
//! Global invariants enforced:
//! - Every business impact carries all five category keys; missing ones are
//!   synthesized as "<Category> impact not specified" / "Unknown"
//! - Only Availability implementation guides carry recovery objectives

use crate::catalog::{
    self, ControlDetail, DimensionSpecifics, ImpactCategory, ImpactDetail, ImplementationEffort,
};
use crate::rating::{Dimension, Rating};
use serde::Serialize;

/// All five categories, each either described or synthesized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerCategoryImpact {
    pub financial: ImpactDetail,
    pub operational: ImpactDetail,
    pub regulatory: ImpactDetail,
    pub reputational: ImpactDetail,
    pub strategic: ImpactDetail,
}

impl PerCategoryImpact {
    pub fn get(&self, category: ImpactCategory) -> &ImpactDetail {
        match category {
            ImpactCategory::Financial => &self.financial,
            ImpactCategory::Operational => &self.operational,
            ImpactCategory::Regulatory => &self.regulatory,
            ImpactCategory::Reputational => &self.reputational,
            ImpactCategory::Strategic => &self.strategic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessImpact {
    pub dimension: Dimension,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub summary: &'static str,
    pub per_category: PerCategoryImpact,
}

/// Recovery objectives; only availability has them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryObjectives {
    pub rto: &'static str,
    pub rpo: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuide {
    pub dimension: Dimension,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub effort: ImplementationEffort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_specific: Option<RecoveryObjectives>,
}

pub fn business_impact(dimension: Dimension, rating: Rating) -> BusinessImpact {
    business_impact_of(catalog::lookup(dimension, rating))
}

/// Business impact for an untyped rating; unknown ratings use the sentinel record
pub fn resolve_business_impact(dimension: Dimension, raw_rating: &str) -> BusinessImpact {
    business_impact_of(catalog::resolve(dimension, raw_rating))
}

fn business_impact_of(detail: &ControlDetail) -> BusinessImpact {
    let fill = |category: ImpactCategory| {
        detail
            .business_impact_breakdown
            .get(category)
            .cloned()
            .unwrap_or_else(|| ImpactDetail::unspecified(category))
    };

    BusinessImpact {
        dimension: detail.dimension,
        rating: detail.rating,
        summary: detail.business_impact,
        per_category: PerCategoryImpact {
            financial: fill(ImpactCategory::Financial),
            operational: fill(ImpactCategory::Operational),
            regulatory: fill(ImpactCategory::Regulatory),
            reputational: fill(ImpactCategory::Reputational),
            strategic: fill(ImpactCategory::Strategic),
        },
    }
}

pub fn technical_implementation(dimension: Dimension, rating: Rating) -> ImplementationGuide {
    implementation_of(catalog::lookup(dimension, rating))
}

pub fn resolve_technical_implementation(
    dimension: Dimension,
    raw_rating: &str,
) -> ImplementationGuide {
    implementation_of(catalog::resolve(dimension, raw_rating))
}

fn implementation_of(detail: &ControlDetail) -> ImplementationGuide {
    let dimension_specific = match &detail.specifics {
        DimensionSpecifics::Availability(targets) => Some(RecoveryObjectives {
            rto: targets.rto,
            rpo: targets.rpo,
        }),
        DimensionSpecifics::Integrity(_) | DimensionSpecifics::Confidentiality(_) => None,
    };

    let implementation = &detail.technical_implementation;
    ImplementationGuide {
        dimension: detail.dimension,
        description: implementation.description,
        steps: implementation.steps,
        effort: implementation.effort.clone(),
        dimension_specific,
    }
}
