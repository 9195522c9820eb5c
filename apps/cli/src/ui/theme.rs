use aivss::domain::RiskLevel;
use owo_colors::OwoColorize;
use std::fmt;

/// Color palette and iconography of the AIVSS CLI.
pub struct Theme;

impl Theme {
    /// Headings and scores
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", text.cyan().bold())
    }

    /// Agentic factors
    pub fn secondary(text: impl fmt::Display) -> String {
        format!("{}", text.magenta().bold())
    }

    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", text.green().bold())
    }

    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", text.yellow().bold())
    }

    pub fn error(text: impl fmt::Display) -> String {
        format!("{}", text.red().bold())
    }

    /// Vectors, ids, timestamps
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", text.dimmed())
    }

    /// Color a value by the severity of its risk level
    pub fn risk(level: RiskLevel, text: impl fmt::Display) -> String {
        match level {
            RiskLevel::Critical => format!("{}", text.red().bold()),
            RiskLevel::High => format!("{}", text.bright_red()),
            RiskLevel::Medium => format!("{}", text.yellow()),
            RiskLevel::Low => format!("{}", text.green()),
            RiskLevel::None => format!("{}", text.dimmed()),
        }
    }
}

/// Usage: `println!("{} Saved", Icon::Check)`
pub enum Icon {
    Shield,
    Check,
    Cross,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Shield => "🛡️ ",
            Icon::Check => "✔",
            Icon::Cross => "✖",
        };
        write!(f, "{}", icon)
    }
}
