pub mod parser;
pub mod validation;

pub use parser::{CatalogFormat, CatalogParser};
pub use validation::{CatalogValidator, ValidationIssue, ValidationLevel, ValidationResult};

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Presets shipped with the calculator.
pub const BUILTIN_CATALOG: &str = include_str!("../presets/builtin.toml");

/// A catalog of named presets that pre-fill the calculator inputs.
/// Can be written as JSON, YAML or TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScenarioCatalog {
    /// Ordered list of presets (display order)
    #[serde(default, rename = "scenario", alias = "scenarios")]
    pub scenarios: Vec<ScenarioPreset>,
}

/// One named preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScenarioPreset {
    /// Stable identifier used to select the preset
    pub id: String,

    /// Human readable name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Optional base score input (metric selection or a legacy numeric score)
    #[serde(default)]
    pub base: Option<ScenarioBase>,

    /// Graded factor values. Factors not listed fall back to the minimum grade.
    #[serde(default)]
    pub factors: Vec<FactorOverride>,
}

/// Base score part of a preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(untagged, from = "BaseRepr")]
pub enum ScenarioBase {
    /// Full CVSS v4.0 base metric selection, e.g. `{ AV = "N", AC = "L", ... }`
    Selection { metrics: BTreeMap<String, String> },
    /// Presets authored before metric selection existed only carry a score.
    LegacyScore { legacy_score: f64 },
}

/// Input form of [`ScenarioBase`]. Each shape rejects the other's keys, so a
/// base carrying both `metrics` and `legacy_score` fails to parse.
#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
enum BaseRepr {
    Selection(SelectionRepr),
    LegacyScore(LegacyScoreRepr),
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct SelectionRepr {
    metrics: BTreeMap<String, String>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct LegacyScoreRepr {
    legacy_score: f64,
}

impl From<BaseRepr> for ScenarioBase {
    fn from(repr: BaseRepr) -> Self {
        match repr {
            BaseRepr::Selection(SelectionRepr { metrics }) => Self::Selection { metrics },
            BaseRepr::LegacyScore(LegacyScoreRepr { legacy_score }) => {
                Self::LegacyScore { legacy_score }
            }
        }
    }
}

/// A single factor value inside a preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FactorOverride {
    pub id: String,
    pub value: f64,
}

impl ScenarioCatalog {
    /// Parse the embedded builtin catalog
    pub fn builtin() -> Result<Self> {
        CatalogParser::parse(BUILTIN_CATALOG, CatalogFormat::Toml)
            .context("Builtin scenario catalog is malformed")
    }

    pub fn get(&self, id: &str) -> Option<&ScenarioPreset> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }
}

impl ScenarioPreset {
    /// Value this preset assigns to a factor, if it lists one
    pub fn factor_value(&self, factor_id: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| f.id == factor_id)
            .map(|f| f.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = ScenarioCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("autonomous-coding-agent").is_some());
    }

    #[test]
    fn test_factor_value_lookup() {
        let preset = ScenarioPreset {
            id: "x".into(),
            name: "X".into(),
            description: String::new(),
            base: None,
            factors: vec![FactorOverride {
                id: "autonomy".into(),
                value: 1.0,
            }],
        };

        assert_eq!(preset.factor_value("autonomy"), Some(1.0));
        assert_eq!(preset.factor_value("persistence"), None);
    }
}
