use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("Scenario catalog error: {0}")]
    Catalog(String),

    #[error("Base vector rejected")]
    VectorRejected,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => Some(
                "Check ~/.aivss/config.toml (or the file passed with --config) for typos."
                    .to_string(),
            ),
            CliError::Input(_) => {
                Some("Run `aivss catalog` to see every metric, value and factor.".to_string())
            }
            CliError::UnknownScenario(_) => {
                Some("Run `aivss scenarios` to list the available presets.".to_string())
            }
            CliError::Catalog(_) => Some(
                "Fix the reported fields or drop --catalog to use the builtin presets."
                    .to_string(),
            ),
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}
