use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FACTOR_COUNT: usize = 10;

/// Agentic AI risk factors, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorId {
    Autonomy,
    ToolUse,
    GoalModification,
    ContextManipulation,
    MultiAgentCoordination,
    LearningAdaptation,
    ResourceAccess,
    Persistence,
    DeceptionCapability,
    SelfModification,
}

/// Assessed grade of a factor: None / Partial / Full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Grade {
    #[default]
    None,
    Partial,
    Full,
}

pub struct FactorTemplate {
    pub id: FactorId,
    pub name: &'static str,
    /// Label used on chart axes
    pub short_label: &'static str,
    pub description: &'static str,
    pub default: Grade,
}

impl FactorId {
    pub const ALL: [FactorId; FACTOR_COUNT] = [
        FactorId::Autonomy,
        FactorId::ToolUse,
        FactorId::GoalModification,
        FactorId::ContextManipulation,
        FactorId::MultiAgentCoordination,
        FactorId::LearningAdaptation,
        FactorId::ResourceAccess,
        FactorId::Persistence,
        FactorId::DeceptionCapability,
        FactorId::SelfModification,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FactorId::Autonomy => "autonomy",
            FactorId::ToolUse => "tool_use",
            FactorId::GoalModification => "goal_modification",
            FactorId::ContextManipulation => "context_manipulation",
            FactorId::MultiAgentCoordination => "multi_agent_coordination",
            FactorId::LearningAdaptation => "learning_adaptation",
            FactorId::ResourceAccess => "resource_access",
            FactorId::Persistence => "persistence",
            FactorId::DeceptionCapability => "deception_capability",
            FactorId::SelfModification => "self_modification",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == id)
    }

    pub fn template(self) -> &'static FactorTemplate {
        &FACTOR_TEMPLATES[self.index()]
    }

    /// All factor ids as strings, e.g. for catalog validation
    pub fn names() -> [&'static str; FACTOR_COUNT] {
        Self::ALL.map(FactorId::as_str)
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::None, Grade::Partial, Grade::Full];

    pub fn value(self) -> f64 {
        match self {
            Grade::None => 0.0,
            Grade::Partial => 0.5,
            Grade::Full => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::None => "None",
            Grade::Partial => "Partial",
            Grade::Full => "Full",
        }
    }

    /// Accepts `0`, `0.5`, `1` or the grade labels (case insensitive)
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if let Ok(value) = trimmed.parse::<f64>() {
            return Grade::try_from(value);
        }
        Self::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidGradeLabel(trimmed.to_string()))
    }
}

impl TryFrom<f64> for Grade {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|g| g.value() == value)
            .ok_or(DomainError::InvalidGrade(value))
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

impl Serialize for Grade {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Grade::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

pub static FACTOR_TEMPLATES: [FactorTemplate; FACTOR_COUNT] = [
    FactorTemplate {
        id: FactorId::Autonomy,
        name: "Autonomy of Action",
        short_label: "Autonomy",
        description: "The agent's ability to act independently without human oversight",
        default: Grade::Partial,
    },
    FactorTemplate {
        id: FactorId::ToolUse,
        name: "Tool Use Capability",
        short_label: "Tool Use",
        description: "Access to external tools and APIs that can affect the environment",
        default: Grade::Partial,
    },
    FactorTemplate {
        id: FactorId::GoalModification,
        name: "Goal Modification",
        short_label: "Goal Mod",
        description: "Ability to alter its objectives or priorities during execution",
        default: Grade::None,
    },
    FactorTemplate {
        id: FactorId::ContextManipulation,
        name: "Context Manipulation",
        short_label: "Context",
        description: "Capability to influence its own context or environment",
        default: Grade::None,
    },
    FactorTemplate {
        id: FactorId::MultiAgentCoordination,
        name: "Multi-Agent Coordination",
        short_label: "Multi-Agent",
        description: "Ability to communicate and coordinate with other AI agents",
        default: Grade::None,
    },
    FactorTemplate {
        id: FactorId::LearningAdaptation,
        name: "Learning & Adaptation",
        short_label: "Learning",
        description: "Dynamic learning and behavioral adaptation capabilities",
        default: Grade::Partial,
    },
    FactorTemplate {
        id: FactorId::ResourceAccess,
        name: "Resource Access",
        short_label: "Resources",
        description: "Access to computational, network, or physical resources",
        default: Grade::Partial,
    },
    FactorTemplate {
        id: FactorId::Persistence,
        name: "Persistence Mechanisms",
        short_label: "Persistence",
        description: "Ability to maintain state and continue operation across sessions",
        default: Grade::None,
    },
    FactorTemplate {
        id: FactorId::DeceptionCapability,
        name: "Deception Capability",
        short_label: "Deception",
        description: "Potential to mislead users or other systems",
        default: Grade::None,
    },
    FactorTemplate {
        id: FactorId::SelfModification,
        name: "Self-Modification",
        short_label: "Self-Mod",
        description: "Ability to modify its own code, parameters, or behavior",
        default: Grade::None,
    },
];
