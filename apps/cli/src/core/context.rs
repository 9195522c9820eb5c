use crate::core::error::CliError;
use aivss::application::{AppConfig, CalculatorService, CatalogError, LoadedCatalog};
use aivss::infrastructure::CvssV4Scorer;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, Registry};

pub type Calculator = CalculatorService<CvssV4Scorer>;

/// Resolved global options shared by every command
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    /// Load the configuration; `--catalog` takes precedence over the config file
    pub fn load(config_path: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<Self, CliError> {
        let mut config = AppConfig::load(config_path.as_deref())
            .map_err(|e| CliError::Config(format!("{:#}", e)))?;
        if catalog.is_some() {
            config.scenario_catalog = catalog;
        }
        Ok(Self { config })
    }

    pub fn calculator(&self) -> Result<(Calculator, LoadedCatalog), CliError> {
        CalculatorService::from_config(CvssV4Scorer::new(), &self.config).map_err(|e| {
            match e.root_cause().downcast_ref::<CatalogError>() {
                Some(CatalogError::Invalid { issues, .. }) => {
                    let details = issues
                        .iter()
                        .map(|i| format!("\n  {}: {}", i.field, i.message))
                        .collect::<String>();
                    CliError::Catalog(format!("{}{}", e.root_cause(), details))
                }
                None => CliError::Catalog(format!("{:#}", e)),
            }
        })
    }
}

/// Adjusts the installed subscriber once the configuration is known
pub struct LogLevel {
    handle: reload::Handle<LevelFilter, Registry>,
    verbose: u8,
}

impl LogLevel {
    /// Switch to the configured level, still raised by `-v`
    pub fn apply_configured(&self, configured: &str) {
        let base = Level::from_str(configured).unwrap_or(Level::WARN);
        if let Err(e) = self.handle.reload(level_filter(base, self.verbose)) {
            tracing::warn!(error = %e, "Could not apply configured log level");
        }
    }
}

/// Install the stderr log subscriber before anything else runs, at the
/// default level raised by `verbose`.
pub fn init_tracing(verbose: u8) -> LogLevel {
    let (filter, handle) = reload::Layer::new(level_filter(Level::WARN, verbose));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
    LogLevel { handle, verbose }
}

fn level_filter(base: Level, verbose: u8) -> LevelFilter {
    let level = match verbose {
        0 => base,
        1 => base.max(Level::INFO),
        2 => base.max(Level::DEBUG),
        _ => Level::TRACE,
    };
    LevelFilter::from_level(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_only_raises_level() {
        assert_eq!(level_filter(Level::WARN, 0), LevelFilter::WARN);
        assert_eq!(level_filter(Level::WARN, 1), LevelFilter::INFO);
        assert_eq!(level_filter(Level::DEBUG, 1), LevelFilter::DEBUG);
        assert_eq!(level_filter(Level::ERROR, 2), LevelFilter::DEBUG);
        assert_eq!(level_filter(Level::INFO, 3), LevelFilter::TRACE);
    }
}
