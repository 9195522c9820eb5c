use aivss::application::ComparedProfile;
use aivss::domain::catalog::{metrics_in, MetricGroup, FACTOR_TEMPLATES};
use aivss::domain::scoring::round_display;
use aivss::domain::{
    BaseMetricSelection, Evaluation, FactorSet, Profile, ReportSnapshot, RiskLevel,
    ThreatMultiplier,
};
use aivss_scenarios::ScenarioCatalog;
use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Toml,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Serialize a report. `Table` renders the score and factor tables.
pub fn export(report: &ReportSnapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).context("Failed to serialize report as YAML")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(report).context("Failed to serialize report as TOML")
        }
        OutputFormat::Table => Ok(report_tables(report)),
    }
}

fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Critical => Color::Red,
        RiskLevel::High => Color::DarkRed,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
        RiskLevel::None => Color::Grey,
    }
}

fn score(value: f64) -> String {
    format!("{:.1}", round_display(value))
}

pub fn scores_table(evaluation: &Evaluation, threat: ThreatMultiplier) -> Table {
    let scores = evaluation.scores;
    let level = scores.risk_level();

    let mut table = table();
    table.set_header(vec!["Score", "Value"]);
    table.add_row(vec![
        Cell::new("CVSS v4.0 base"),
        Cell::new(score(scores.base_score)),
    ]);
    table.add_row(vec![
        Cell::new("Agentic AI risk (AARS)"),
        Cell::new(score(scores.secondary_score)),
    ]);
    table.add_row(vec![
        Cell::new("Threat multiplier"),
        Cell::new(format!("{} ({})", threat, threat.label())),
    ]);
    table.add_row(vec![
        Cell::new("AIVSS composite"),
        Cell::new(format!("{} {}", score(scores.composite_score), level)).fg(risk_color(level)),
    ]);
    table
}

pub fn factors_table(factors: &FactorSet) -> Table {
    let mut table = table();
    table.set_header(vec!["Factor", "Id", "Grade"]);
    for factor in factors.graded() {
        table.add_row(vec![
            Cell::new(factor.name),
            Cell::new(factor.id),
            Cell::new(format!("{} ({})", factor.value, factor.value.label())),
        ]);
    }
    table
}

pub fn selection_table(selection: &BaseMetricSelection) -> Table {
    let mut table = table();
    table.set_header(vec!["Metric", "Code", "Value"]);
    for (metric, value) in selection.iter() {
        let definition = metric.definition();
        let label = definition
            .option(value)
            .map(|o| o.label.to_string())
            .unwrap_or_else(|| value.to_string());
        table.add_row(vec![
            Cell::new(definition.name),
            Cell::new(metric.code()),
            Cell::new(label),
        ]);
    }
    table
}

pub fn profiles_table(profiles: &[Profile], compared: &[ComparedProfile]) -> Table {
    let mut table = table();
    table.set_header(vec!["Id", "Name", "Created", "Compare"]);
    for profile in profiles {
        let slot = compared
            .iter()
            .find(|c| c.profile.id == profile.id)
            .map(|c| format!("slot {}", c.slot + 1))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(profile.id),
            Cell::new(&profile.name),
            Cell::new(profile.created_at.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(slot),
        ]);
    }
    table
}

pub fn comparison_table(compared: &[ComparedProfile]) -> Table {
    let mut table = table();
    let mut header = vec![String::from("")];
    header.extend(
        compared
            .iter()
            .map(|c| format!("#{} {}", c.profile.id, c.profile.name)),
    );
    table.set_header(header);

    let row = |label: &str, value: &dyn Fn(&ComparedProfile) -> String| {
        let mut cells = vec![Cell::new(label)];
        cells.extend(compared.iter().map(|c| Cell::new(value(c))));
        cells
    };

    table.add_row(row("Base", &|c| score(c.evaluation.scores.base_score)));
    table.add_row(row("AARS", &|c| score(c.evaluation.scores.secondary_score)));
    table.add_row(row("Threat", &|c| c.profile.inputs.threat.to_string()));
    table.add_row(row("Composite", &|c| {
        score(c.evaluation.scores.composite_score)
    }));
    table.add_row(row("Risk", &|c| c.evaluation.scores.risk_level().to_string()));
    table.add_row(row("Vector", &|c| c.evaluation.summary_vector.clone()));
    table
}

pub fn metric_catalog_tables() -> Vec<(MetricGroup, Table)> {
    [
        MetricGroup::Exploitability,
        MetricGroup::VulnerableSystemImpact,
        MetricGroup::SubsequentSystemImpact,
    ]
    .into_iter()
    .map(|group| {
        let mut table = table();
        table.set_header(vec!["Code", "Metric", "Values", "Default"]);
        for metric in metrics_in(group) {
            let values = metric
                .options
                .iter()
                .map(|o| o.label)
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![
                Cell::new(metric.id.code()),
                Cell::new(metric.name),
                Cell::new(values),
                Cell::new(metric.default),
            ]);
        }
        (group, table)
    })
    .collect()
}

pub fn factor_catalog_table() -> Table {
    let mut table = table();
    table.set_header(vec!["Id", "Factor", "Default", "Description"]);
    for template in FACTOR_TEMPLATES.iter() {
        table.add_row(vec![
            Cell::new(template.id),
            Cell::new(template.name),
            Cell::new(template.default),
            Cell::new(template.description),
        ]);
    }
    table
}

pub fn scenarios_table(catalog: &ScenarioCatalog) -> Table {
    let mut table = table();
    table.set_header(vec!["Id", "Name", "Base", "Factors", "Description"]);
    for preset in &catalog.scenarios {
        let base = match &preset.base {
            Some(aivss_scenarios::ScenarioBase::Selection { metrics }) => {
                format!("{} metric(s)", metrics.len())
            }
            Some(aivss_scenarios::ScenarioBase::LegacyScore { legacy_score }) => {
                format!("score {:.1}", legacy_score)
            }
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(&preset.id),
            Cell::new(&preset.name),
            Cell::new(base),
            Cell::new(preset.factors.len()),
            Cell::new(&preset.description),
        ]);
    }
    table
}

fn report_tables(report: &ReportSnapshot) -> String {
    let mut table = table();
    table.set_header(vec!["Score", "Value"]);
    table.add_row(vec![Cell::new("CVSS v4.0 base"), Cell::new(score(report.base_score))]);
    table.add_row(vec![
        Cell::new("Agentic AI risk (AARS)"),
        Cell::new(score(report.secondary_score)),
    ]);
    table.add_row(vec![
        Cell::new("Threat multiplier"),
        Cell::new(report.threat_multiplier),
    ]);
    table.add_row(vec![
        Cell::new("AIVSS composite"),
        Cell::new(format!(
            "{} {}",
            score(report.composite_score),
            report.risk_level
        ))
        .fg(risk_color(report.risk_level)),
    ]);

    let mut factors = self::table();
    factors.set_header(vec!["Factor", "Grade"]);
    for factor in &report.graded_factors {
        factors.add_row(vec![Cell::new(&factor.name), Cell::new(factor.value)]);
    }

    let mut out = format!(
        "{}\n{}\n{}\n{}\n",
        report.summary_vector, report.base_vector, table, factors
    );
    if let Some(notice) = &report.base_score_notice {
        out.push_str(&format!("Base score fell back to 0.0: {}\n", notice));
    }
    out
}
