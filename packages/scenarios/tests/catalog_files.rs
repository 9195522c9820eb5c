use aivss_scenarios::{CatalogFormat, CatalogParser, CatalogValidator, ScenarioCatalog};
use pretty_assertions::assert_eq;
use std::io::Write;

const FACTORS: [&str; 10] = [
    "autonomy",
    "tool_use",
    "goal_modification",
    "context_manipulation",
    "multi_agent_coordination",
    "learning_adaptation",
    "resource_access",
    "persistence",
    "deception_capability",
    "self_modification",
];

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = ScenarioCatalog::builtin().unwrap();
    let result = CatalogValidator::validate(&catalog, &FACTORS);

    assert!(result.valid, "issues: {:?}", result.issues);
    assert!(!result.has_warnings(), "issues: {:?}", result.issues);
}

#[test]
fn test_catalog_survives_format_conversion() {
    let catalog = ScenarioCatalog::builtin().unwrap();

    let yaml = CatalogParser::serialize(&catalog, CatalogFormat::Yaml).unwrap();
    let from_yaml = CatalogParser::parse(&yaml, CatalogFormat::Yaml).unwrap();
    assert_eq!(from_yaml, catalog);

    let json = CatalogParser::serialize(&catalog, CatalogFormat::Json).unwrap();
    let from_json = CatalogParser::parse(&json, CatalogFormat::Json).unwrap();
    assert_eq!(from_json, catalog);
}

#[test]
fn test_parse_file_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{ "scenarios": [{{ "id": "lab", "name": "Lab Agent", "factors": [] }}] }}"#
    )
    .unwrap();

    let catalog = CatalogParser::parse_file(file.path()).unwrap();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["lab"]);
}
