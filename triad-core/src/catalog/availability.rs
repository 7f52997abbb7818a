//! Availability control records

use super::{
    sentinel, AvailabilityTargets, ControlDetail, DimensionSpecifics, ImpactBreakdown,
    ImpactDetail, ImplementationEffort, TechnicalImplementation, UNKNOWN_TEXT,
};
use crate::rating::{Dimension, Rating};

pub(super) static UNKNOWN: ControlDetail = sentinel(
    Dimension::Availability,
    DimensionSpecifics::Availability(AvailabilityTargets {
        uptime_target: UNKNOWN_TEXT,
        rto: UNKNOWN_TEXT,
        rpo: UNKNOWN_TEXT,
        mttr: UNKNOWN_TEXT,
    }),
);

pub(super) static CONTROLS: [ControlDetail; 5] = [
    ControlDetail {
        dimension: Dimension::Availability,
        rating: Some(Rating::None),
        description: "No availability controls. Systems may fail without warning and there is no plan to restore them.",
        technical: "No redundancy, monitoring, or backup. Recovery depends on ad-hoc manual effort.",
        business_impact: "Any outage halts dependent business processes for an unbounded period, with direct revenue loss and customer churn.",
        capex_percent: 0.0,
        opex_percent: 0.0,
        recommendations: &[],
        value_points: &[
            "No upfront investment required",
            "All downtime risk is retained by the business",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Unplanned outages translate directly into lost transactions and emergency spend",
                risk_level: "Critical",
                annual_revenue_loss: Some("Potentially >20% of revenue for online services"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail {
                description: "Staff cannot work while systems are down and recovery is improvised",
                risk_level: "Critical",
                annual_revenue_loss: None,
                mean_time_to_recover: Some("Days to weeks"),
                compliance_violations: None,
            },
            regulatory: Some(ImpactDetail {
                description: "Service continuity obligations cannot be demonstrated",
                risk_level: "Critical",
                annual_revenue_loss: None,
                mean_time_to_recover: None,
                compliance_violations: Some(&["SOC 2 availability criteria", "ISO 27001 A.17"]),
            }),
            reputational: None,
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: "No availability engineering in place",
            steps: &["Inventory critical systems and their dependencies"],
            effort: ImplementationEffort {
                development: "None",
                maintenance: "None",
                expertise: "None",
            },
        },
        specifics: DimensionSpecifics::Availability(AvailabilityTargets {
            uptime_target: "No guarantee",
            rto: "Undefined",
            rpo: "Undefined",
            mttr: "Undefined",
        }),
    },
    ControlDetail {
        dimension: Dimension::Availability,
        rating: Some(Rating::Low),
        description: "Basic availability with scheduled backups and manual recovery procedures.",
        technical: "Daily backups, basic uptime monitoring, and a documented manual restore procedure.",
        business_impact: "Outages are survivable but recovery takes a business day or more; suitable for non-critical internal systems.",
        capex_percent: 5.0,
        opex_percent: 2.0,
        recommendations: &[
            "Schedule daily backups and verify a restore at least quarterly",
            "Document manual recovery procedures for each critical system",
            "Add basic uptime monitoring with email alerting",
        ],
        value_points: &[
            "Minimal investment protects against total data loss",
            "Recovery becomes repeatable rather than improvised",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Extended outages still cause measurable revenue loss",
                risk_level: "High",
                annual_revenue_loss: Some("5-10% of revenue for customer-facing services"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail {
                description: "Recovery relies on manual steps performed by a few individuals",
                risk_level: "High",
                annual_revenue_loss: None,
                mean_time_to_recover: Some("24-48 hours"),
                compliance_violations: None,
            },
            regulatory: None,
            reputational: Some(ImpactDetail::text(
                "Customers notice multi-hour outages and lose confidence",
                "High",
            )),
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: "Backup and basic monitoring for critical systems",
            steps: &[
                "Configure automated daily backups",
                "Set up ping-based uptime monitoring",
                "Write and store manual recovery runbooks",
            ],
            effort: ImplementationEffort {
                development: "Days",
                maintenance: "Hours per month",
                expertise: "General IT",
            },
        },
        specifics: DimensionSpecifics::Availability(AvailabilityTargets {
            uptime_target: "95%",
            rto: "24-48 hours",
            rpo: "24 hours",
            mttr: "24 hours",
        }),
    },
    ControlDetail {
        dimension: Dimension::Availability,
        rating: Some(Rating::Moderate),
        description: "Standard availability with partial redundancy and tested recovery plans.",
        technical: "Redundant components for critical services, automated backups, and a tested disaster recovery plan.",
        business_impact: "Most outages are resolved within a working shift; appropriate for core business applications.",
        capex_percent: 15.0,
        opex_percent: 10.0,
        recommendations: &[
            "Add redundancy for single points of failure in critical services",
            "Automate backups with off-site replication",
            "Test the disaster recovery plan at least twice a year",
            "Define and track RTO and RPO per service",
        ],
        value_points: &[
            "Keeps core business processes running through common failures",
            "Meets typical customer availability expectations",
            "Recovery targets become measurable",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Outage costs are bounded by defined recovery objectives",
                risk_level: "Medium",
                annual_revenue_loss: Some("1-5% of revenue"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail {
                description: "Recovery is rehearsed and largely automated",
                risk_level: "Medium",
                annual_revenue_loss: None,
                mean_time_to_recover: Some("4-8 hours"),
                compliance_violations: None,
            },
            regulatory: Some(ImpactDetail::text(
                "Meets baseline continuity requirements of common frameworks",
                "Medium",
            )),
            reputational: Some(ImpactDetail::text(
                "Occasional short outages are tolerated by most customers",
                "Medium",
            )),
            strategic: Some(ImpactDetail::text(
                "Supports dependable delivery of core services",
                "Medium",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "Partial redundancy with automated backup and tested recovery",
            steps: &[
                "Identify single points of failure",
                "Deploy redundant instances for critical services",
                "Automate off-site backup replication",
                "Run a disaster recovery exercise",
            ],
            effort: ImplementationEffort {
                development: "Weeks",
                maintenance: "Days per month",
                expertise: "Systems administration",
            },
        },
        specifics: DimensionSpecifics::Availability(AvailabilityTargets {
            uptime_target: "99%",
            rto: "4-8 hours",
            rpo: "1-4 hours",
            mttr: "4 hours",
        }),
    },
    ControlDetail {
        dimension: Dimension::Availability,
        rating: Some(Rating::High),
        description: "High availability with automatic failover across redundant infrastructure.",
        technical: "Active-passive or active-active clusters, load balancing, real-time replication, and 24/7 monitoring.",
        business_impact: "Outages are rare and short; suitable for revenue-generating and customer-facing systems.",
        capex_percent: 30.0,
        opex_percent: 20.0,
        recommendations: &[
            "Deploy clustered services with automatic failover",
            "Replicate data in real time to a secondary site",
            "Staff or contract 24/7 incident response",
            "Load-test failover paths regularly",
        ],
        value_points: &[
            "Protects revenue streams from infrastructure failures",
            "Enables contractual SLAs with customers",
            "Reduces the cost of each incident through fast recovery",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Downtime losses are small and predictable",
                risk_level: "Low",
                annual_revenue_loss: Some("<1% of revenue"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail {
                description: "Failover is automatic and staff focus on root cause",
                risk_level: "Low",
                annual_revenue_loss: None,
                mean_time_to_recover: Some("Under 1 hour"),
                compliance_violations: None,
            },
            regulatory: Some(ImpactDetail::text(
                "Satisfies continuity requirements for regulated services",
                "Low",
            )),
            reputational: Some(ImpactDetail::text(
                "Reliability becomes a selling point",
                "Low",
            )),
            strategic: Some(ImpactDetail::text(
                "Allows expansion into markets that demand strong SLAs",
                "Low",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "Clustered, load-balanced services with real-time replication",
            steps: &[
                "Design a redundant architecture for each critical service",
                "Configure load balancers and health checks",
                "Set up real-time data replication",
                "Automate failover and verify it under load",
                "Establish 24/7 monitoring and on-call rotation",
            ],
            effort: ImplementationEffort {
                development: "Months",
                maintenance: "Dedicated part-time staff",
                expertise: "Site reliability engineering",
            },
        },
        specifics: DimensionSpecifics::Availability(AvailabilityTargets {
            uptime_target: "99.9%",
            rto: "1 hour",
            rpo: "15 minutes",
            mttr: "1 hour",
        }),
    },
    ControlDetail {
        dimension: Dimension::Availability,
        rating: Some(Rating::VeryHigh),
        description: "Maximum availability with geographically distributed, self-healing infrastructure.",
        technical: "Multi-region active-active deployment, continuous replication, chaos testing, and automated remediation.",
        business_impact: "Effectively continuous service; required where minutes of downtime have severe financial or safety consequences.",
        capex_percent: 45.0,
        opex_percent: 30.0,
        recommendations: &[
            "Run active-active across multiple geographic regions",
            "Adopt chaos engineering to validate resilience continuously",
            "Automate remediation for known failure modes",
            "Eliminate shared dependencies between regions",
        ],
        value_points: &[
            "Near-zero downtime for mission-critical services",
            "Resilient to regional disasters",
            "Supports the most demanding contractual and regulatory SLAs",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Downtime losses are negligible",
                risk_level: "Minimal",
                annual_revenue_loss: Some("Negligible"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail {
                description: "Failures are absorbed without user-visible impact",
                risk_level: "Minimal",
                annual_revenue_loss: None,
                mean_time_to_recover: Some("Minutes"),
                compliance_violations: None,
            },
            regulatory: Some(ImpactDetail::text(
                "Meets the strictest operational resilience regulations",
                "Minimal",
            )),
            reputational: Some(ImpactDetail::text(
                "Recognised as a highly dependable provider",
                "Minimal",
            )),
            strategic: Some(ImpactDetail::text(
                "Enables critical-infrastructure and financial-market offerings",
                "Minimal",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "Multi-region active-active platform with automated remediation",
            steps: &[
                "Design a multi-region architecture without shared failure domains",
                "Implement global traffic management",
                "Replicate data continuously across regions",
                "Introduce chaos experiments into regular operations",
                "Automate remediation runbooks",
            ],
            effort: ImplementationEffort {
                development: "Many months",
                maintenance: "Dedicated reliability team",
                expertise: "Distributed systems engineering",
            },
        },
        specifics: DimensionSpecifics::Availability(AvailabilityTargets {
            uptime_target: "99.999%",
            rto: "Under 5 minutes",
            rpo: "Near-zero",
            mttr: "Under 15 minutes",
        }),
    },
];
