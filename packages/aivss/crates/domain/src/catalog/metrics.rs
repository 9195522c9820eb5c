use serde::{Deserialize, Serialize};
use std::fmt;

pub const METRIC_COUNT: usize = 11;

/// CVSS v4.0 base metrics, in canonical vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricId {
    #[serde(rename = "AV")]
    AttackVector,
    #[serde(rename = "AC")]
    AttackComplexity,
    #[serde(rename = "AT")]
    AttackRequirements,
    #[serde(rename = "PR")]
    PrivilegesRequired,
    #[serde(rename = "UI")]
    UserInteraction,
    #[serde(rename = "VC")]
    VulnerableConfidentiality,
    #[serde(rename = "VI")]
    VulnerableIntegrity,
    #[serde(rename = "VA")]
    VulnerableAvailability,
    #[serde(rename = "SC")]
    SubsequentConfidentiality,
    #[serde(rename = "SI")]
    SubsequentIntegrity,
    #[serde(rename = "SA")]
    SubsequentAvailability,
}

/// The three groups the calculator presents base metrics in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricGroup {
    Exploitability,
    VulnerableSystemImpact,
    SubsequentSystemImpact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricOption {
    pub value: char,
    pub label: &'static str,
    pub description: &'static str,
}

/// Immutable catalog entry for one base metric
#[derive(Debug, PartialEq, Eq)]
pub struct BaseMetric {
    pub id: MetricId,
    pub name: &'static str,
    pub group: MetricGroup,
    pub default: char,
    pub options: &'static [MetricOption],
}

impl MetricId {
    pub const ALL: [MetricId; METRIC_COUNT] = [
        MetricId::AttackVector,
        MetricId::AttackComplexity,
        MetricId::AttackRequirements,
        MetricId::PrivilegesRequired,
        MetricId::UserInteraction,
        MetricId::VulnerableConfidentiality,
        MetricId::VulnerableIntegrity,
        MetricId::VulnerableAvailability,
        MetricId::SubsequentConfidentiality,
        MetricId::SubsequentIntegrity,
        MetricId::SubsequentAvailability,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Short code used in vector strings
    pub fn code(self) -> &'static str {
        match self {
            MetricId::AttackVector => "AV",
            MetricId::AttackComplexity => "AC",
            MetricId::AttackRequirements => "AT",
            MetricId::PrivilegesRequired => "PR",
            MetricId::UserInteraction => "UI",
            MetricId::VulnerableConfidentiality => "VC",
            MetricId::VulnerableIntegrity => "VI",
            MetricId::VulnerableAvailability => "VA",
            MetricId::SubsequentConfidentiality => "SC",
            MetricId::SubsequentIntegrity => "SI",
            MetricId::SubsequentAvailability => "SA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    pub fn definition(self) -> &'static BaseMetric {
        &BASE_METRICS[self.index()]
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricGroup::Exploitability => write!(f, "Exploitability Metrics"),
            MetricGroup::VulnerableSystemImpact => write!(f, "Vulnerable System Impact Metrics"),
            MetricGroup::SubsequentSystemImpact => write!(f, "Subsequent System Impact Metrics"),
        }
    }
}

impl BaseMetric {
    pub fn option(&self, value: char) -> Option<&'static MetricOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn allows(&self, value: char) -> bool {
        self.option(value).is_some()
    }

    /// Comma separated list of the allowed value codes
    pub fn allowed_values(&self) -> String {
        self.options
            .iter()
            .map(|o| o.value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Base metrics belonging to one group, in catalog order
pub fn metrics_in(group: MetricGroup) -> impl Iterator<Item = &'static BaseMetric> {
    BASE_METRICS.iter().filter(move |m| m.group == group)
}

const IMPACT_VULNERABLE: &[MetricOption] = &[
    MetricOption {
        value: 'H',
        label: "High (H)",
        description: "Total loss within the vulnerable system",
    },
    MetricOption {
        value: 'L',
        label: "Low (L)",
        description: "Partial or constrained loss within the vulnerable system",
    },
    MetricOption {
        value: 'N',
        label: "None (N)",
        description: "No loss within the vulnerable system",
    },
];

const IMPACT_SUBSEQUENT: &[MetricOption] = &[
    MetricOption {
        value: 'H',
        label: "High (H)",
        description: "Total loss within a subsequent system",
    },
    MetricOption {
        value: 'L',
        label: "Low (L)",
        description: "Partial or constrained loss within a subsequent system",
    },
    MetricOption {
        value: 'N',
        label: "None (N)",
        description: "No loss within any subsequent system",
    },
];

pub static BASE_METRICS: [BaseMetric; METRIC_COUNT] = [
    BaseMetric {
        id: MetricId::AttackVector,
        name: "Attack Vector (AV)",
        group: MetricGroup::Exploitability,
        default: 'N',
        options: &[
            MetricOption {
                value: 'N',
                label: "Network (N)",
                description: "Remotely exploitable across the network stack",
            },
            MetricOption {
                value: 'A',
                label: "Adjacent (A)",
                description: "Limited to a shared physical or logical network",
            },
            MetricOption {
                value: 'L',
                label: "Local (L)",
                description: "Requires local access or user-assisted delivery",
            },
            MetricOption {
                value: 'P',
                label: "Physical (P)",
                description: "Requires physically touching the system",
            },
        ],
    },
    BaseMetric {
        id: MetricId::AttackComplexity,
        name: "Attack Complexity (AC)",
        group: MetricGroup::Exploitability,
        default: 'L',
        options: &[
            MetricOption {
                value: 'L',
                label: "Low (L)",
                description: "No security-enhancing conditions must be evaded",
            },
            MetricOption {
                value: 'H',
                label: "High (H)",
                description: "Active defensive measures must be circumvented",
            },
        ],
    },
    BaseMetric {
        id: MetricId::AttackRequirements,
        name: "Attack Requirements (AT)",
        group: MetricGroup::Exploitability,
        default: 'N',
        options: &[
            MetricOption {
                value: 'N',
                label: "None (N)",
                description: "Success does not depend on deployment conditions",
            },
            MetricOption {
                value: 'P',
                label: "Present (P)",
                description: "Success depends on specific deployment or execution conditions",
            },
        ],
    },
    BaseMetric {
        id: MetricId::PrivilegesRequired,
        name: "Privileges Required (PR)",
        group: MetricGroup::Exploitability,
        default: 'N',
        options: &[
            MetricOption {
                value: 'N',
                label: "None (N)",
                description: "Attacker is unauthenticated",
            },
            MetricOption {
                value: 'L',
                label: "Low (L)",
                description: "Basic user capabilities are required",
            },
            MetricOption {
                value: 'H',
                label: "High (H)",
                description: "Administrative control is required",
            },
        ],
    },
    BaseMetric {
        id: MetricId::UserInteraction,
        name: "User Interaction (UI)",
        group: MetricGroup::Exploitability,
        default: 'N',
        options: &[
            MetricOption {
                value: 'N',
                label: "None (N)",
                description: "No human user participation is required",
            },
            MetricOption {
                value: 'P',
                label: "Passive (P)",
                description: "Limited, involuntary interaction by a user",
            },
            MetricOption {
                value: 'A',
                label: "Active (A)",
                description: "A user must perform specific, conscious actions",
            },
        ],
    },
    BaseMetric {
        id: MetricId::VulnerableConfidentiality,
        name: "Confidentiality (VC)",
        group: MetricGroup::VulnerableSystemImpact,
        default: 'H',
        options: IMPACT_VULNERABLE,
    },
    BaseMetric {
        id: MetricId::VulnerableIntegrity,
        name: "Integrity (VI)",
        group: MetricGroup::VulnerableSystemImpact,
        default: 'H',
        options: IMPACT_VULNERABLE,
    },
    BaseMetric {
        id: MetricId::VulnerableAvailability,
        name: "Availability (VA)",
        group: MetricGroup::VulnerableSystemImpact,
        default: 'H',
        options: IMPACT_VULNERABLE,
    },
    BaseMetric {
        id: MetricId::SubsequentConfidentiality,
        name: "Confidentiality (SC)",
        group: MetricGroup::SubsequentSystemImpact,
        default: 'N',
        options: IMPACT_SUBSEQUENT,
    },
    BaseMetric {
        id: MetricId::SubsequentIntegrity,
        name: "Integrity (SI)",
        group: MetricGroup::SubsequentSystemImpact,
        default: 'N',
        options: IMPACT_SUBSEQUENT,
    },
    BaseMetric {
        id: MetricId::SubsequentAvailability,
        name: "Availability (SA)",
        group: MetricGroup::SubsequentSystemImpact,
        default: 'N',
        options: IMPACT_SUBSEQUENT,
    },
];
