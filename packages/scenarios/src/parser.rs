use crate::ScenarioCatalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Multi-format scenario catalog parser (JSON, YAML, TOML)
pub struct CatalogParser;

/// Supported catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogParser {
    /// Auto-detect format from file extension and parse
    pub fn parse_file(path: &Path) -> Result<ScenarioCatalog> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario catalog: {}", path.display()))?;

        let format = Self::detect_format(path)?;
        Self::parse(&content, format)
    }

    /// Parse catalog from string with explicit format
    pub fn parse(content: &str, format: CatalogFormat) -> Result<ScenarioCatalog> {
        match format {
            CatalogFormat::Json => {
                serde_json::from_str(content).context("Failed to parse JSON scenario catalog")
            }
            CatalogFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse YAML scenario catalog")
            }
            CatalogFormat::Toml => {
                toml::from_str(content).context("Failed to parse TOML scenario catalog")
            }
        }
    }

    /// Detect format from file extension
    pub fn detect_format(path: &Path) -> Result<CatalogFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", path.display()))?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            "toml" => Ok(CatalogFormat::Toml),
            _ => anyhow::bail!("Unsupported catalog format: .{}", extension),
        }
    }

    /// Serialize catalog to string
    pub fn serialize(catalog: &ScenarioCatalog, format: CatalogFormat) -> Result<String> {
        match format {
            CatalogFormat::Json => {
                serde_json::to_string_pretty(catalog).context("Failed to serialize to JSON")
            }
            CatalogFormat::Yaml => {
                serde_yaml::to_string(catalog).context("Failed to serialize to YAML")
            }
            CatalogFormat::Toml => {
                toml::to_string_pretty(catalog).context("Failed to serialize to TOML")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScenarioBase;

    #[test]
    fn test_parse_json_minimal() {
        let json = r#"
        {
            "scenarios": [
                {
                    "id": "bot",
                    "name": "Bot",
                    "factors": [{ "id": "autonomy", "value": 0.5 }]
                }
            ]
        }
        "#;

        let catalog = CatalogParser::parse(json, CatalogFormat::Json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.scenarios[0].factor_value("autonomy"), Some(0.5));
    }

    #[test]
    fn test_parse_yaml_legacy_score() {
        let yaml = r#"
scenarios:
  - id: old
    name: Old Preset
    base:
      legacy_score: 6.5
"#;

        let catalog = CatalogParser::parse(yaml, CatalogFormat::Yaml).unwrap();
        assert_eq!(
            catalog.scenarios[0].base,
            Some(ScenarioBase::LegacyScore { legacy_score: 6.5 })
        );
        assert!(catalog.scenarios[0].factors.is_empty());
    }

    #[test]
    fn test_parse_toml_selection() {
        let toml = r#"
[[scenario]]
id = "net"
name = "Network"

[scenario.base.metrics]
AV = "N"
"#;

        let catalog = CatalogParser::parse(toml, CatalogFormat::Toml).unwrap();
        match &catalog.scenarios[0].base {
            Some(ScenarioBase::Selection { metrics }) => {
                assert_eq!(metrics.get("AV").map(String::as_str), Some("N"));
            }
            other => panic!("unexpected base: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{ "scenarios": [{ "id": "a", "name": "A", "colour": "red" }] }"#;
        assert!(CatalogParser::parse(json, CatalogFormat::Json).is_err());
    }

    #[test]
    fn test_base_with_both_shapes_rejected() {
        let yaml = r#"
scenarios:
  - id: mixed
    name: Mixed
    base:
      metrics:
        AV: N
      legacy_score: 6.5
"#;
        assert!(CatalogParser::parse(yaml, CatalogFormat::Yaml).is_err());

        let toml = r#"
[[scenario]]
id = "typo"
name = "Typo"

[scenario.base]
legacy_scor = 6.5
"#;
        assert!(CatalogParser::parse(toml, CatalogFormat::Toml).is_err());
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            CatalogParser::detect_format(Path::new("presets.yml")).unwrap(),
            CatalogFormat::Yaml
        );
        assert!(CatalogParser::detect_format(Path::new("presets.ini")).is_err());
        assert!(CatalogParser::detect_format(Path::new("presets")).is_err());
    }
}
