use crate::{ScenarioBase, ScenarioCatalog, ScenarioPreset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Grades a factor may take
pub const ALLOWED_GRADES: [f64; 3] = [0.0, 0.5, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize, Deserialize)]
pub enum ValidationLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Error,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Warning,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Warning)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate a catalog against the set of factor ids the calculator knows.
    pub fn validate(catalog: &ScenarioCatalog, known_factors: &[&str]) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut seen = HashSet::new();

        for (idx, preset) in catalog.scenarios.iter().enumerate() {
            let prefix = format!("scenarios[{}]", idx);

            if preset.id.trim().is_empty() {
                result.add_error(format!("{}.id", prefix), "Scenario id must not be empty");
            } else if !seen.insert(preset.id.as_str()) {
                result.add_error(
                    format!("{}.id", prefix),
                    format!("Duplicate scenario id '{}'", preset.id),
                );
            }

            if preset.name.trim().is_empty() {
                result.add_error(
                    format!("{}.name", prefix),
                    format!("Scenario '{}' has no name", preset.id),
                );
            }

            Self::validate_base(preset, &prefix, &mut result);
            Self::validate_factors(preset, &prefix, known_factors, &mut result);
        }

        result
    }

    fn validate_base(preset: &ScenarioPreset, prefix: &str, result: &mut ValidationResult) {
        match &preset.base {
            Some(ScenarioBase::LegacyScore { legacy_score }) => {
                if !(0.0..=10.0).contains(legacy_score) {
                    result.add_error(
                        format!("{}.base.legacy_score", prefix),
                        format!("Legacy score {} is outside 0.0..=10.0", legacy_score),
                    );
                }
            }
            Some(ScenarioBase::Selection { metrics }) if metrics.is_empty() => {
                result.add_warning(
                    format!("{}.base.metrics", prefix),
                    "Empty metric selection leaves the base metrics unchanged",
                );
            }
            _ => {}
        }
    }

    fn validate_factors(
        preset: &ScenarioPreset,
        prefix: &str,
        known_factors: &[&str],
        result: &mut ValidationResult,
    ) {
        let mut seen = HashSet::new();

        for (idx, factor) in preset.factors.iter().enumerate() {
            let field = format!("{}.factors[{}]", prefix, idx);

            if !ALLOWED_GRADES.contains(&factor.value) {
                result.add_error(
                    format!("{}.value", field),
                    format!(
                        "Factor '{}' has grade {}, expected 0.0, 0.5 or 1.0",
                        factor.id, factor.value
                    ),
                );
            }

            if !known_factors.contains(&factor.id.as_str()) {
                result.add_warning(
                    format!("{}.id", field),
                    format!("Unknown factor '{}' will be ignored", factor.id),
                );
            }

            if !seen.insert(factor.id.as_str()) {
                result.add_warning(
                    format!("{}.id", field),
                    format!("Factor '{}' is listed more than once; first value wins", factor.id),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FactorOverride;

    fn preset(id: &str, factors: Vec<FactorOverride>) -> ScenarioPreset {
        ScenarioPreset {
            id: id.to_string(),
            name: format!("Preset {}", id),
            description: String::new(),
            base: None,
            factors,
        }
    }

    #[test]
    fn test_duplicate_ids_are_errors() {
        let catalog = ScenarioCatalog {
            scenarios: vec![preset("a", vec![]), preset("a", vec![])],
        };

        let result = CatalogValidator::validate(&catalog, &[]);
        assert!(!result.valid);
        assert!(result.has_errors());
    }

    #[test]
    fn test_bad_grade_and_unknown_factor() {
        let catalog = ScenarioCatalog {
            scenarios: vec![preset(
                "a",
                vec![
                    FactorOverride {
                        id: "autonomy".into(),
                        value: 0.7,
                    },
                    FactorOverride {
                        id: "telepathy".into(),
                        value: 1.0,
                    },
                ],
            )],
        };

        let result = CatalogValidator::validate(&catalog, &["autonomy"]);
        assert!(result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(result.issues.len(), 2);
    }

    #[test]
    fn test_legacy_score_range() {
        let mut p = preset("a", vec![]);
        p.base = Some(ScenarioBase::LegacyScore { legacy_score: 12.0 });
        let catalog = ScenarioCatalog { scenarios: vec![p] };

        assert!(!CatalogValidator::validate(&catalog, &[]).valid);
    }
}
