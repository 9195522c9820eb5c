pub mod calculator;
pub mod catalog;
pub mod config;

pub use calculator::{AppliedBase, CalculatorService, ComparedProfile, ScenarioApplied};
pub use catalog::{load_catalog, CatalogError, CatalogSource, LoadedCatalog};
pub use config::AppConfig;
