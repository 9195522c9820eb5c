use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environmental likelihood of exploitation, applied to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreatMultiplier {
    /// No public exploit or attack reports
    Unreported,
    /// Proof-of-concept exploit is publicly available
    ProofOfConcept,
    /// Attacks are reported or exploitation is trivial
    #[default]
    Attacked,
}

impl ThreatMultiplier {
    pub const ALL: [ThreatMultiplier; 3] = [
        ThreatMultiplier::Unreported,
        ThreatMultiplier::ProofOfConcept,
        ThreatMultiplier::Attacked,
    ];

    pub fn value(self) -> f64 {
        match self {
            ThreatMultiplier::Unreported => 0.91,
            ThreatMultiplier::ProofOfConcept => 0.97,
            ThreatMultiplier::Attacked => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThreatMultiplier::Unreported => "Unreported (0.91)",
            ThreatMultiplier::ProofOfConcept => "Proof of Concept (0.97)",
            ThreatMultiplier::Attacked => "Attacked (1.0)",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ThreatMultiplier::Unreported => "unreported",
            ThreatMultiplier::ProofOfConcept => "proof-of-concept",
            ThreatMultiplier::Attacked => "attacked",
        }
    }
}

impl FromStr for ThreatMultiplier {
    type Err = DomainError;

    /// Accepts the numeric value (`0.97`) or the kebab-case name (`proof-of-concept`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = match s.parse::<f64>() {
            Ok(value) => Self::ALL.into_iter().find(|t| t.value() == value),
            Err(_) => Self::ALL
                .into_iter()
                .find(|t| t.slug().eq_ignore_ascii_case(s)),
        };
        found.ok_or_else(|| DomainError::UnknownThreatMultiplier(s.to_string()))
    }
}

impl fmt::Display for ThreatMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_and_named() {
        assert_eq!(
            "0.97".parse::<ThreatMultiplier>().unwrap(),
            ThreatMultiplier::ProofOfConcept
        );
        assert_eq!(
            "unreported".parse::<ThreatMultiplier>().unwrap(),
            ThreatMultiplier::Unreported
        );
        assert_eq!("1".parse::<ThreatMultiplier>().unwrap(), ThreatMultiplier::Attacked);
        assert!("1.5".parse::<ThreatMultiplier>().is_err());
    }

    #[test]
    fn test_display_is_the_multiplier() {
        assert_eq!(ThreatMultiplier::Unreported.to_string(), "0.91");
        assert_eq!(ThreatMultiplier::Attacked.to_string(), "1");
    }
}
