use aivss_scenarios::{
    CatalogParser, CatalogValidator, ScenarioCatalog, ValidationIssue, ValidationLevel,
    ValidationResult,
};
use anyhow::{Context, Result};
use domain::{FactorId, ScenarioLoader};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "builtin presets"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Scenario catalog {source_name} is invalid ({} error(s))", .issues.len())]
    Invalid {
        source_name: String,
        issues: Vec<ValidationIssue>,
    },
}

/// A parsed catalog together with its non-fatal validation findings
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: ScenarioCatalog,
    pub source: CatalogSource,
    pub validation: ValidationResult,
}

/// Load the catalog at `path`, or the builtin presets.
///
/// Catalogs with validation errors are refused; warnings are kept on the
/// result and logged.
pub fn load_catalog(path: Option<&Path>) -> Result<LoadedCatalog> {
    let (catalog, source) = match path {
        Some(path) => (
            CatalogParser::parse_file(path)
                .with_context(|| format!("Failed to load scenario catalog {}", path.display()))?,
            CatalogSource::File(path.to_path_buf()),
        ),
        None => (
            ScenarioCatalog::builtin().context("Builtin scenario catalog is broken")?,
            CatalogSource::Builtin,
        ),
    };

    let mut validation = CatalogValidator::validate(&catalog, &FactorId::names());
    for (idx, preset) in catalog.scenarios.iter().enumerate() {
        if let Err(e) = ScenarioLoader::base_for(preset) {
            validation.add_error(format!("scenarios[{}].base.metrics", idx), e.to_string());
        }
    }
    if validation.has_errors() {
        let issues = validation
            .issues
            .into_iter()
            .filter(|i| i.level == ValidationLevel::Error)
            .collect();
        return Err(CatalogError::Invalid {
            source_name: source.to_string(),
            issues,
        }
        .into());
    }

    for issue in &validation.issues {
        tracing::warn!(catalog = %source, field = %issue.field, "{}", issue.message);
    }
    tracing::debug!(catalog = %source, scenarios = catalog.len(), "Loaded scenario catalog");

    Ok(LoadedCatalog {
        catalog,
        source,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_loads_clean() {
        let loaded = load_catalog(None).unwrap();
        assert_eq!(loaded.source, CatalogSource::Builtin);
        assert!(!loaded.catalog.is_empty());
        assert!(loaded.validation.issues.is_empty());
    }

    #[test]
    fn test_invalid_file_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"scenario": [{"id": "x", "name": "X", "factors": [{"id": "autonomy", "value": 0.7}]}]}"#,
        )
        .unwrap();

        let err = load_catalog(Some(&path)).unwrap_err();
        let CatalogError::Invalid { issues, .. } = err.downcast_ref::<CatalogError>().unwrap();
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_unknown_metric_in_selection_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "[[scenario]]\nid = \"x\"\nname = \"X\"\nbase = { metrics = { ZZ = \"N\" } }\n",
        )
        .unwrap();

        let err = load_catalog(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn test_warnings_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warn.yaml");
        fs::write(
            &path,
            "scenario:\n  - id: x\n    name: X\n    factors:\n      - id: telepathy\n        value: 1.0\n",
        )
        .unwrap();

        let loaded = load_catalog(Some(&path)).unwrap();
        assert!(loaded.validation.has_warnings());
        assert_eq!(loaded.source, CatalogSource::File(path));
    }
}
