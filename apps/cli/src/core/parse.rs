use crate::core::error::CliError;
use aivss::domain::{FactorId, Grade, ThreatMultiplier};

/// `AV=N` or `AV:N`
pub fn metric_assignment(input: &str) -> Result<(String, String), CliError> {
    let (code, value) = input
        .split_once('=')
        .or_else(|| input.split_once(':'))
        .ok_or_else(|| CliError::Input(format!("expected METRIC=VALUE, got '{}'", input)))?;
    Ok((code.trim().to_uppercase(), value.trim().to_string()))
}

/// `autonomy=1`, `tool_use=partial`
pub fn factor_assignment(input: &str) -> Result<(FactorId, Grade), CliError> {
    let (id, grade) = input
        .split_once('=')
        .ok_or_else(|| CliError::Input(format!("expected FACTOR=GRADE, got '{}'", input)))?;
    let id = factor_id(id)?;
    let grade = Grade::parse(grade).map_err(|e| CliError::Input(e.to_string()))?;
    Ok((id, grade))
}

pub fn factor_id(input: &str) -> Result<FactorId, CliError> {
    let normalized = input.trim().to_lowercase().replace('-', "_");
    FactorId::parse(&normalized)
        .ok_or_else(|| CliError::Input(format!("unknown factor '{}'", input.trim())))
}

pub fn threat(input: &str) -> Result<ThreatMultiplier, CliError> {
    input
        .parse()
        .map_err(|e: aivss::domain::DomainError| CliError::Input(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_assignment_forms() {
        assert_eq!(
            metric_assignment("av=N").unwrap(),
            ("AV".to_string(), "N".to_string())
        );
        assert_eq!(
            metric_assignment("SC:L").unwrap(),
            ("SC".to_string(), "L".to_string())
        );
        assert!(metric_assignment("AV").is_err());
    }

    #[test]
    fn test_factor_assignment() {
        assert_eq!(
            factor_assignment("tool-use=0.5").unwrap(),
            (FactorId::ToolUse, Grade::Partial)
        );
        assert_eq!(
            factor_assignment("autonomy=full").unwrap(),
            (FactorId::Autonomy, Grade::Full)
        );
        assert!(factor_assignment("autonomy=0.7").is_err());
        assert!(factor_assignment("telepathy=1").is_err());
    }

    #[test]
    fn test_threat_forms() {
        assert_eq!(threat("0.97").unwrap(), ThreatMultiplier::ProofOfConcept);
        assert_eq!(threat("unreported").unwrap(), ThreatMultiplier::Unreported);
        assert!(threat("2").is_err());
    }
}
