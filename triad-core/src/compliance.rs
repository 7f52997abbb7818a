//! Compliance framework evaluation
//!
//! Global invariants enforced:
//! - Framework order is the static table order
//! - Monotonic: raising a rating never removes a framework from the compliant list

use crate::posture::SecurityPosture;
use crate::rating::Rating;
use serde::Serialize;

/// Minimum ratings a framework requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkRequirement {
    pub name: &'static str,
    pub minimum: SecurityPosture,
}

static FRAMEWORKS: [FrameworkRequirement; 7] = [
    requirement("SOC 2", Rating::Moderate, Rating::Moderate, Rating::Moderate),
    requirement("ISO 27001", Rating::Moderate, Rating::Moderate, Rating::Moderate),
    requirement("NIST 800-53", Rating::Moderate, Rating::Moderate, Rating::Moderate),
    requirement("PCI DSS", Rating::Moderate, Rating::High, Rating::High),
    requirement("HIPAA", Rating::Moderate, Rating::High, Rating::High),
    requirement("GDPR", Rating::Low, Rating::Moderate, Rating::High),
    requirement("FedRAMP High", Rating::High, Rating::High, Rating::High),
];

const fn requirement(
    name: &'static str,
    availability: Rating,
    integrity: Rating,
    confidentiality: Rating,
) -> FrameworkRequirement {
    FrameworkRequirement {
        name,
        minimum: SecurityPosture {
            availability,
            integrity,
            confidentiality,
        },
    }
}

/// Overall compliance label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceLevel {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
}

impl ComplianceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceLevel::Compliant => "Compliant with all frameworks",
            ComplianceLevel::PartiallyCompliant => "Partially compliant",
            ComplianceLevel::NonCompliant => "Non-compliant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStatus {
    pub level: ComplianceLevel,
    pub status: &'static str,
    pub compliant_frameworks: Vec<&'static str>,
    pub partially_compliant_frameworks: Vec<&'static str>,
    pub non_compliant_frameworks: Vec<&'static str>,
    /// Percentage of frameworks fully met, rounded
    pub compliance_score: u32,
}

pub fn frameworks() -> &'static [FrameworkRequirement] {
    &FRAMEWORKS
}

/// Number of dimensions of `posture` that meet the framework minimum
fn dimensions_met(posture: &SecurityPosture, framework: &FrameworkRequirement) -> usize {
    posture
        .ratings()
        .into_iter()
        .filter(|(dimension, rating)| *rating >= framework.minimum.get(*dimension))
        .count()
}

pub fn compliance_status(posture: &SecurityPosture) -> ComplianceStatus {
    let mut compliant = Vec::new();
    let mut partial = Vec::new();
    let mut non_compliant = Vec::new();

    for framework in frameworks() {
        match dimensions_met(posture, framework) {
            3 => compliant.push(framework.name),
            0 => non_compliant.push(framework.name),
            _ => partial.push(framework.name),
        }
    }

    let total = frameworks().len() as u32;
    let met = compliant.len() as u32;
    let compliance_score = (met * 100 + total / 2) / total;

    let level = if met == total {
        ComplianceLevel::Compliant
    } else if met > 0 {
        ComplianceLevel::PartiallyCompliant
    } else {
        ComplianceLevel::NonCompliant
    };

    ComplianceStatus {
        level,
        status: level.label(),
        compliant_frameworks: compliant,
        partially_compliant_frameworks: partial,
        non_compliant_frameworks: non_compliant,
        compliance_score,
    }
}
