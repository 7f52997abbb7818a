//! Confidentiality control records

use super::{
    sentinel, ConfidentialityControls, ControlDetail, DimensionSpecifics, ImpactBreakdown,
    ImpactDetail, ImplementationEffort, TechnicalImplementation, UNKNOWN_TEXT,
};
use crate::rating::{Dimension, Rating};

pub(super) static UNKNOWN: ControlDetail = sentinel(
    Dimension::Confidentiality,
    DimensionSpecifics::Confidentiality(ConfidentialityControls {
        protection_method: UNKNOWN_TEXT,
    }),
);

pub(super) static CONTROLS: [ControlDetail; 5] = [
    ControlDetail {
        dimension: Dimension::Confidentiality,
        rating: Some(Rating::None),
        description: "No confidentiality controls. Information is accessible to anyone who can reach the system.",
        technical: "No authentication, access control, or encryption.",
        business_impact: "Sensitive data can be read or exfiltrated freely, exposing the business to breach costs and legal action.",
        capex_percent: 0.0,
        opex_percent: 0.0,
        recommendations: &[],
        value_points: &[
            "No upfront investment required",
            "Any data exposure is undetected and uncontained",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Breach response, fines, and lost business after disclosure",
                risk_level: "Critical",
                annual_revenue_loss: Some("Breach costs can exceed annual IT budget"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail::text(
                "No way to know who accessed what",
                "Critical",
            ),
            regulatory: Some(ImpactDetail {
                description: "Personal and payment data are unprotected",
                risk_level: "Critical",
                annual_revenue_loss: None,
                mean_time_to_recover: None,
                compliance_violations: Some(&["GDPR", "HIPAA", "PCI DSS"]),
            }),
            reputational: Some(ImpactDetail::text(
                "Public disclosure of a breach causes lasting loss of trust",
                "Critical",
            )),
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: "No confidentiality engineering in place",
            steps: &["Classify data by sensitivity"],
            effort: ImplementationEffort {
                development: "None",
                maintenance: "None",
                expertise: "None",
            },
        },
        specifics: DimensionSpecifics::Confidentiality(ConfidentialityControls {
            protection_method: "None",
        }),
    },
    ControlDetail {
        dimension: Dimension::Confidentiality,
        rating: Some(Rating::Low),
        description: "Basic confidentiality with passwords and coarse access control.",
        technical: "Username and password authentication, shared roles, and TLS on public endpoints.",
        business_impact: "Casual access is prevented, but credential theft or misconfiguration exposes broad data sets.",
        capex_percent: 5.0,
        opex_percent: 2.0,
        recommendations: &[
            "Require individual accounts with strong passwords",
            "Encrypt traffic to public endpoints with TLS",
            "Restrict administrative access to named staff",
        ],
        value_points: &[
            "Blocks opportunistic access at low cost",
            "Establishes accountability through individual accounts",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail::text(
                "A single compromised account can expose large data sets",
                "High",
            ),
            operational: ImpactDetail::text(
                "Access reviews are manual and infrequent",
                "High",
            ),
            regulatory: Some(ImpactDetail::text(
                "Falls short of data-protection requirements for personal data",
                "High",
            )),
            reputational: None,
            strategic: None,
        },
        technical_implementation: TechnicalImplementation {
            description: "Password authentication with coarse role-based access",
            steps: &[
                "Provision individual user accounts",
                "Enforce a password policy",
                "Enable TLS on externally reachable services",
            ],
            effort: ImplementationEffort {
                development: "Days",
                maintenance: "Hours per month",
                expertise: "General IT",
            },
        },
        specifics: DimensionSpecifics::Confidentiality(ConfidentialityControls {
            protection_method: "Basic access control",
        }),
    },
    ControlDetail {
        dimension: Dimension::Confidentiality,
        rating: Some(Rating::Moderate),
        description: "Standard confidentiality with encryption at rest and role-based access control.",
        technical: "Multi-factor authentication for privileged users, RBAC, encryption at rest and in transit, and access logging.",
        business_impact: "Typical business and personal data is protected to industry norms.",
        capex_percent: 15.0,
        opex_percent: 10.0,
        recommendations: &[
            "Enforce multi-factor authentication for privileged accounts",
            "Implement role-based access control aligned with job functions",
            "Encrypt sensitive data at rest and in transit",
            "Review access rights quarterly",
        ],
        value_points: &[
            "Meets customer expectations for data protection",
            "Limits breach scope through least privilege",
            "Access logs support investigations",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail {
                description: "Breach likelihood and scope are reduced",
                risk_level: "Medium",
                annual_revenue_loss: Some("1-3% of revenue exposed to breach costs"),
                mean_time_to_recover: None,
                compliance_violations: None,
            },
            operational: ImpactDetail::text(
                "Access is managed through roles rather than individual grants",
                "Medium",
            ),
            regulatory: Some(ImpactDetail::text(
                "Meets baseline requirements of common privacy regulations",
                "Medium",
            )),
            reputational: Some(ImpactDetail::text(
                "Demonstrable protection reassures customers",
                "Medium",
            )),
            strategic: Some(ImpactDetail::text(
                "Qualifies for most enterprise procurement reviews",
                "Medium",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "RBAC with MFA and encryption at rest and in transit",
            steps: &[
                "Define roles and map users to them",
                "Roll out MFA for privileged access",
                "Enable storage-level encryption for sensitive data",
                "Centralise access logs",
            ],
            effort: ImplementationEffort {
                development: "Weeks",
                maintenance: "Days per month",
                expertise: "Security administration",
            },
        },
        specifics: DimensionSpecifics::Confidentiality(ConfidentialityControls {
            protection_method: "Standard encryption and role-based access",
        }),
    },
    ControlDetail {
        dimension: Dimension::Confidentiality,
        rating: Some(Rating::High),
        description: "High confidentiality with end-to-end encryption and fine-grained access control.",
        technical: "MFA for all users, attribute-based access control, field-level encryption, DLP, and centralised key management.",
        business_impact: "Sensitive and regulated data is strongly protected; suitable for financial, health, and personal data.",
        capex_percent: 30.0,
        opex_percent: 20.0,
        recommendations: &[
            "Require multi-factor authentication for all users",
            "Encrypt sensitive fields end to end with managed keys",
            "Deploy data loss prevention on egress channels",
            "Apply fine-grained, attribute-based access policies",
        ],
        value_points: &[
            "Protects regulated data to auditor expectations",
            "Limits damage from compromised credentials",
            "Strengthens competitive position in security-conscious markets",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail::text(
                "Breach costs are unlikely and contained",
                "Low",
            ),
            operational: ImpactDetail::text(
                "Access decisions are automated and auditable",
                "Low",
            ),
            regulatory: Some(ImpactDetail::text(
                "Satisfies HIPAA, PCI DSS, and GDPR technical safeguards",
                "Low",
            )),
            reputational: Some(ImpactDetail::text(
                "Trusted with sensitive customer information",
                "Low",
            )),
            strategic: Some(ImpactDetail::text(
                "Enables entry into regulated industries",
                "Low",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "End-to-end encryption with centralised key management and DLP",
            steps: &[
                "Deploy a key management service",
                "Encrypt sensitive fields at the application layer",
                "Roll out MFA to all users",
                "Define attribute-based access policies",
                "Configure DLP on email and web egress",
            ],
            effort: ImplementationEffort {
                development: "Months",
                maintenance: "Dedicated part-time staff",
                expertise: "Security engineering",
            },
        },
        specifics: DimensionSpecifics::Confidentiality(ConfidentialityControls {
            protection_method: "End-to-end encryption with strong access controls",
        }),
    },
    ControlDetail {
        dimension: Dimension::Confidentiality,
        rating: Some(Rating::VeryHigh),
        description: "Maximum confidentiality with zero-trust architecture and hardware-backed key protection.",
        technical: "Zero-trust network access, hardware security modules, continuous authentication, and confidential computing.",
        business_impact: "Protection appropriate for trade secrets, national security, and the most sensitive personal data.",
        capex_percent: 45.0,
        opex_percent: 30.0,
        recommendations: &[
            "Adopt a zero-trust architecture for all access",
            "Protect keys in hardware security modules",
            "Use confidential computing for sensitive workloads",
            "Run continuous red-team exercises",
        ],
        value_points: &[
            "Protects the most valuable intellectual property",
            "Resilient to advanced persistent threats",
            "Meets classified and high-assurance requirements",
        ],
        business_impact_breakdown: ImpactBreakdown {
            financial: ImpactDetail::text(
                "Data-breach losses are negligible",
                "Minimal",
            ),
            operational: ImpactDetail::text(
                "Every access is continuously verified",
                "Minimal",
            ),
            regulatory: Some(ImpactDetail::text(
                "Exceeds confidentiality requirements of all major frameworks",
                "Minimal",
            )),
            reputational: Some(ImpactDetail::text(
                "Recognised for industry-leading data protection",
                "Minimal",
            )),
            strategic: Some(ImpactDetail::text(
                "Qualifies for government and defence contracts",
                "Minimal",
            )),
        },
        technical_implementation: TechnicalImplementation {
            description: "Zero-trust architecture with hardware-backed cryptography",
            steps: &[
                "Segment every workload behind identity-aware proxies",
                "Move key material into hardware security modules",
                "Introduce continuous authentication signals",
                "Migrate sensitive processing to confidential computing",
                "Establish a standing red team",
            ],
            effort: ImplementationEffort {
                development: "Many months",
                maintenance: "Dedicated security team",
                expertise: "Advanced security architecture",
            },
        },
        specifics: DimensionSpecifics::Confidentiality(ConfidentialityControls {
            protection_method: "Zero-trust architecture with hardware security modules",
        }),
    },
];
