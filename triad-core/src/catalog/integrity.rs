//! Integrity control records

use super::{
    sentinel, ControlDetail, DimensionSpecifics, ImpactBreakdown, ImpactDetail,
    ImplementationEffort, IntegrityControls, TechnicalImplementation, UNKNOWN_TEXT,
};
use crate::rating::{Dimension, Rating};

pub(super) static UNKNOWN: ControlDetail = sentinel(
    Dimension::Integrity,
    DimensionSpecifics::Integrity(IntegrityControls {
        validation_method: UNKNOWN_TEXT,
    }),
);

pub(super) static CONTROLS: [ControlDetail; 5] = [
    ControlDetail {
        dimension: Dimension::Integrity,
        rating: Some(Rating::None),
        description: "No integrity controls. Data can be altered or corrupted without detection.",
        technical: "No input validation, checksums, audit trails, or change control.",
        business_impact: "Decisions, invoices, and reports may rest on corrupted data; errors surface only after damage is done.",
        capex_percent: 0.0,
        opex_percent: 0.0,
        recommendations: &[],
        value_points: &[
            "No upfront investment required",
            "Undetected data corruption remains possible at any time",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Incorrect transactions and billing errors go unnoticed",
                risk_level: "Critical",
                annual_revenue_loss: Some("Unbounded; depends on when errors are discovered"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail::text(
                "Teams cannot trust system data and duplicate work to verify it",
                "Critical",
            ),
            regulatory: Some(ImpactDetail {
                description: "Financial and record-keeping accuracy cannot be attested",
                risk_level: "Critical",
                annual_revenue_loss: None,
                mean_time_to_recover: None,
                compliance_violations: Some(&["SOX record accuracy", "GDPR accuracy principle"]),
            }),
            reputational: None,
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: "No integrity engineering in place",
            steps: &["Identify data whose corruption would cause material harm"],
            effort: ImplementationEffort {
                development: "None",
                maintenance: "None",
                expertise: "None",
            },
        },
        specifics: DimensionSpecifics::Integrity(IntegrityControls {
            validation_method: "None",
        }),
    },
    ControlDetail {
        dimension: Dimension::Integrity,
        rating: Some(Rating::Low),
        description: "Basic integrity through manual checks and simple input validation.",
        technical: "Form-level validation, periodic manual reconciliation, and basic application logs.",
        business_impact: "Obvious errors are caught, but subtle or deliberate tampering can go unnoticed for long periods.",
        capex_percent: 5.0,
        opex_percent: 2.0,
        recommendations: &[
            "Validate all user input at system boundaries",
            "Reconcile critical records manually on a fixed schedule",
            "Keep application logs for data-changing operations",
        ],
        value_points: &[
            "Catches common data-entry errors cheaply",
            "Creates a minimal trail for investigating discrepancies",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail::text(
                "Reconciliation catches larger errors, but slowly",
                "High",
            ),
            operational: ImpactDetail::text(
                "Manual checks consume staff time and are inconsistent",
                "High",
            ),
            regulatory: Some(ImpactDetail::text(
                "Limited evidence of data accuracy for auditors",
                "High",
            )),
            reputational: None,
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: "Input validation and manual reconciliation",
            steps: &[
                "Add validation rules to data entry points",
                "Define reconciliation procedures for critical records",
                "Enable logging of create, update, and delete operations",
            ],
            effort: ImplementationEffort {
                development: "Days",
                maintenance: "Hours per week",
                expertise: "General development",
            },
        },
        specifics: DimensionSpecifics::Integrity(IntegrityControls {
            validation_method: "Manual validation",
        }),
    },
    ControlDetail {
        dimension: Dimension::Integrity,
        rating: Some(Rating::Moderate),
        description: "Standard integrity with automated validation and audit logging.",
        technical: "Schema and business-rule validation, database constraints, checksums on transfers, and tamper-evident audit logs.",
        business_impact: "Data errors are detected quickly and traced to their source; suitable for most business records.",
        capex_percent: 15.0,
        opex_percent: 10.0,
        recommendations: &[
            "Enforce business rules with automated validation",
            "Use database constraints and transactions for critical writes",
            "Verify checksums on all data transfers",
            "Centralise audit logs and review them regularly",
        ],
        value_points: &[
            "Reliable data for everyday business decisions",
            "Audit trails shorten investigations",
            "Reduces rework caused by bad data",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Most financial errors are blocked before they post",
                risk_level: "Medium",
                annual_revenue_loss: Some("1-3% of revenue exposed to data errors"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail {
                description: "Errors are traced through audit logs rather than guesswork",
                risk_level: "Medium",
                annual_revenue_loss: None,
                mean_time_to_recover: Some("Hours"),
                compliance_violations: None,
            },
            regulatory: Some(ImpactDetail::text(
                "Audit logging meets common record-keeping requirements",
                "Medium",
            )),
            reputational: Some(ImpactDetail::text(
                "Customers rarely see data mistakes",
                "Medium",
            )),
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: "Automated validation with centralised audit logging",
            steps: &[
                "Codify validation rules in shared libraries",
                "Add database constraints for critical entities",
                "Introduce checksums on file and message transfers",
                "Ship audit events to a central log store",
            ],
            effort: ImplementationEffort {
                development: "Weeks",
                maintenance: "Days per month",
                expertise: "Application development",
            },
        },
        specifics: DimensionSpecifics::Integrity(IntegrityControls {
            validation_method: "Automated validation",
        }),
    },
    ControlDetail {
        dimension: Dimension::Integrity,
        rating: Some(Rating::High),
        description: "High integrity with cryptographic verification and strict change control.",
        technical: "Digital signatures or HMACs on critical records, immutable audit logs, and segregation of duties for changes.",
        business_impact: "Tampering is detectable and attributable; suitable for financial records and regulated data.",
        capex_percent: 30.0,
        opex_percent: 20.0,
        recommendations: &[
            "Sign or MAC critical records and verify on read",
            "Store audit logs in write-once storage",
            "Enforce segregation of duties for data changes",
            "Continuously monitor for integrity violations",
        ],
        value_points: &[
            "Provable data accuracy for auditors and partners",
            "Deters insider manipulation",
            "Supports non-repudiation of transactions",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Fraud and manipulation are detected early",
                risk_level: "Low",
                annual_revenue_loss: Some("<1% of revenue"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail::text(
                "Integrity alerts route to owners automatically",
                "Low",
            ),
            regulatory: Some(ImpactDetail::text(
                "Satisfies strict financial reporting controls",
                "Low",
            )),
            reputational: Some(ImpactDetail::text(
                "Partners trust shared data without re-verification",
                "Low",
            )),
            strategic: Some(ImpactDetail::text(
                "Enables data-sharing partnerships and regulated products",
                "Low",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "Cryptographic verification with immutable audit trails",
            steps: &[
                "Select signing or MAC scheme and key management",
                "Sign critical records at write time",
                "Verify signatures on every read path",
                "Move audit logs to write-once storage",
                "Implement change approval workflow",
            ],
            effort: ImplementationEffort {
                development: "Months",
                maintenance: "Dedicated part-time staff",
                expertise: "Security engineering",
            },
        },
        specifics: DimensionSpecifics::Integrity(IntegrityControls {
            validation_method: "Cryptographic verification",
        }),
    },
    ControlDetail {
        dimension: Dimension::Integrity,
        rating: Some(Rating::VeryHigh),
        description: "Maximum integrity with distributed, independently verifiable records.",
        technical: "Append-only ledgers with multi-party verification, formal change proofs, and real-time anomaly detection.",
        business_impact: "Records are effectively tamper-proof; required for critical financial, legal, or safety data.",
        capex_percent: 45.0,
        opex_percent: 30.0,
        recommendations: &[
            "Adopt an append-only ledger for critical records",
            "Require multi-party verification for changes",
            "Deploy real-time integrity anomaly detection",
            "Commission independent integrity audits",
        ],
        value_points: &[
            "Tamper-proof records accepted as legal evidence",
            "Eliminates reconciliation between parties",
            "Strongest possible assurance for regulators",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail::text(
                "Financial manipulation is practically infeasible",
                "Minimal",
            ),
            operational: ImpactDetail::text(
                "Reconciliation effort disappears for ledger-backed data",
                "Minimal",
            ),
            regulatory: Some(ImpactDetail::text(
                "Exceeds record-integrity requirements of all major frameworks",
                "Minimal",
            )),
            reputational: Some(ImpactDetail::text(
                "Seen as a benchmark for trustworthy data handling",
                "Minimal",
            )),
            strategic: Some(ImpactDetail::text(
                "Opens markets that require verifiable provenance",
                "Minimal",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "Distributed append-only ledger with multi-party verification",
            steps: &[
                "Model critical records as ledger entries",
                "Deploy ledger nodes operated by independent parties",
                "Implement multi-party approval for writes",
                "Stream integrity metrics into anomaly detection",
                "Schedule independent verification audits",
            ],
            effort: ImplementationEffort {
                development: "Many months",
                maintenance: "Dedicated integrity team",
                expertise: "Cryptography and distributed systems",
            },
        },
        specifics: DimensionSpecifics::Integrity(IntegrityControls {
            validation_method: "Immutable ledger with multi-party verification",
        }),
    },
];
