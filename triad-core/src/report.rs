//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use crate::compliance::ComplianceStatus;
use crate::facade::{ImpactReport, SecurityMetrics};
use crate::timeline::ImplementationTimeline;
use serde::Serialize;

/// Render any result as pretty JSON
///
/// Struct fields serialize in declaration order, so output is stable.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Render security metrics as text output
pub fn render_metrics_text(metrics: &SecurityMetrics) -> String {
    let mut output = String::new();
    let posture = &metrics.posture;

    output.push_str(&format!(
        "{:<18} {:<12} {:<12} {}\n",
        "", "AVAILABILITY", "INTEGRITY", "CONFIDENTIALITY"
    ));
    output.push_str(&format!(
        "{:<18} {:<12} {:<12} {}\n",
        "Rating",
        posture.availability.as_str(),
        posture.integrity.as_str(),
        posture.confidentiality.as_str()
    ));
    output.push('\n');

    let overall_suffix = if metrics.aggregation.is_manual() {
        " (pinned)"
    } else {
        ""
    };
    output.push_str(&format!(
        "{:<18} {}{}\n",
        "Overall rating",
        metrics.overall_rating.as_str(),
        overall_suffix
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Risk level",
        metrics.risk_level.as_str()
    ));
    output.push_str(&format!("{:<18} {}\n", "Scale", metrics.classification));
    output.push('\n');

    let costs = &metrics.costs;
    output.push_str(&format!(
        "{:<18} {:.1} ({:.0}% of first-year spend)\n",
        "CAPEX", costs.capex_total, costs.capex_percent_of_budget
    ));
    output.push_str(&format!(
        "{:<18} {:.1} ({:.0}% of first-year spend)\n",
        "OPEX / year", costs.opex_total, costs.opex_percent_of_budget
    ));
    output.push_str(&format!("{:<18} {:.1}\n", "3-year TCO", costs.three_year_tco));
    output.push('\n');

    let roi = metrics.roi;
    output.push_str(&format!("{:<18} {}\n", "ROI", roi.return_rate_percent));
    output.push_str(&format!("{:<18} {}\n", "Break-even", roi.break_even_period));
    output.push_str(&format!("{:<18} {}\n", "Savings", roi.potential_savings));
    output.push_str(&format!("{:<18} {}\n", "", roi.description));

    output
}

/// Render an implementation timeline as text output
pub fn render_timeline_text(timeline: &ImplementationTimeline) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Implementation timeline for {} overall rating: {}\n",
        timeline.overall_rating.as_str(),
        timeline.total_duration
    ));
    for (index, phase) in timeline.phases.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {:<20} {}\n",
            index + 1,
            phase.name,
            phase.duration
        ));
    }
    output
}

/// Render a (dimension, rating) narrative report as text output
pub fn render_impact_text(report: &ImpactReport) -> String {
    let mut output = String::new();
    let impact = &report.business_impact;
    let rating = impact
        .rating
        .map(|r| r.as_str())
        .unwrap_or(crate::catalog::UNKNOWN_TEXT);

    output.push_str(&format!("{} / {}\n", impact.dimension.title(), rating));
    output.push_str(&format!("{}\n\n", report.description));
    output.push_str(&format!("Business impact: {}\n", impact.summary));

    for category in crate::catalog::ImpactCategory::ALL {
        let detail = impact.per_category.get(category);
        output.push_str(&format!(
            "  {:<13} [{}] {}\n",
            category.as_str(),
            detail.risk_level,
            detail.description
        ));
    }

    let guide = &report.technical_implementation;
    output.push_str(&format!("\nImplementation: {}\n", guide.description));
    for step in guide.steps {
        output.push_str(&format!("  - {}\n", step));
    }
    output.push_str(&format!(
        "  Effort: development {}, maintenance {}, expertise {}\n",
        guide.effort.development, guide.effort.maintenance, guide.effort.expertise
    ));
    if let Some(objectives) = &guide.dimension_specific {
        output.push_str(&format!(
            "  Recovery: RTO {}, RPO {}\n",
            objectives.rto, objectives.rpo
        ));
    }

    if !report.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        output.push_str(&render_list_text(report.recommendations));
    }

    output
}

/// Render a compliance status as text output
pub fn render_compliance_text(status: &ComplianceStatus) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} (score {}%)\n",
        status.status, status.compliance_score
    ));
    for (heading, names) in [
        ("Compliant", &status.compliant_frameworks),
        ("Partially compliant", &status.partially_compliant_frameworks),
        ("Non-compliant", &status.non_compliant_frameworks),
    ] {
        if names.is_empty() {
            continue;
        }
        output.push_str(&format!("  {:<20} {}\n", heading, names.join(", ")));
    }
    output
}

/// Render a numbered list, one item per line
pub fn render_list_text(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}\n", i + 1, item))
        .collect()
}
