use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative severity band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn classify(score: f64) -> Self {
        if score >= 9.0 {
            RiskLevel::Critical
        } else if score >= 7.0 {
            RiskLevel::High
        } else if score >= 4.0 {
            RiskLevel::Medium
        } else if score >= 0.1 {
            RiskLevel::Low
        } else {
            RiskLevel::None
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::None => write!(f, "None"),
            RiskLevel::Low => write!(f, "Low Risk"),
            RiskLevel::Medium => write!(f, "Medium Risk"),
            RiskLevel::High => write!(f, "High Risk"),
            RiskLevel::Critical => write!(f, "Critical Risk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::None);
        assert_eq!(RiskLevel::classify(0.1), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(3.99), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(4.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(7.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(9.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(20.0), RiskLevel::Critical);
    }
}
