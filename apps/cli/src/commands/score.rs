use crate::core::context::{AppContext, Calculator};
use crate::core::error::CliError;
use crate::core::parse;
use crate::ui::render::{self, OutputFormat};
use crate::ui::{self, diagnostic, Theme};
use aivss::application::AppliedBase;
use aivss::domain::catalog::MetricId;
use aivss::domain::{BaseScorer, FactorId, Grade, ThreatMultiplier};
use aivss::infrastructure::adapters::cvss4::ParsedVector;
use aivss::infrastructure::CvssV4Scorer;
use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct ScoreCommand {
    /// Start from a scenario preset
    #[arg(long, short)]
    pub scenario: Option<String>,

    /// Full CVSS v4.0 base vector to start from
    #[arg(long)]
    pub vector: Option<String>,

    /// Base metric override, e.g. `AV=L` (repeatable)
    #[arg(long = "metric", short = 'm', value_parser = parse_metric)]
    pub metrics: Vec<(String, String)>,

    /// Factor grade, e.g. `autonomy=1` or `tool_use=partial` (repeatable)
    #[arg(long = "factor", short = 'f', value_parser = parse_factor)]
    pub factors: Vec<(FactorId, Grade)>,

    /// Threat multiplier: 1, 0.97, 0.91 or attacked / proof-of-concept / unreported
    #[arg(long, short, value_parser = parse_threat)]
    pub threat: Option<ThreatMultiplier>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn parse_metric(input: &str) -> Result<(String, String), String> {
    parse::metric_assignment(input).map_err(|e| e.to_string())
}

fn parse_factor(input: &str) -> Result<(FactorId, Grade), String> {
    parse::factor_assignment(input).map_err(|e| e.to_string())
}

fn parse_threat(input: &str) -> Result<ThreatMultiplier, String> {
    parse::threat(input).map_err(|e| e.to_string())
}

impl ScoreCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let (mut calc, _) = ctx.calculator()?;
        self.apply(&mut calc)?;

        let report = calc.report();
        let rendered = match self.format {
            OutputFormat::Table => {
                let evaluation = calc.evaluate();
                format!(
                    "{}\n{}\n{}\n{}",
                    Theme::primary(&evaluation.summary_vector),
                    Theme::muted(&evaluation.base_vector),
                    render::scores_table(&evaluation, calc.inputs().threat),
                    render::factors_table(&calc.inputs().factors)
                )
            }
            format => render::export(&report, format)?,
        };

        match &self.output {
            Some(path) => {
                fs::write(path, &rendered).map_err(CliError::from)?;
                ui::success(format!("Report written to {}", path.display()));
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }

    /// Scenario first, then the vector, then individual overrides
    pub fn apply(&self, calc: &mut Calculator) -> Result<(), CliError> {
        if let Some(id) = &self.scenario {
            let applied = calc
                .apply_scenario(id)
                .map_err(|e| CliError::Catalog(format!("{:#}", e)))?
                .ok_or_else(|| CliError::UnknownScenario(id.clone()))?;
            if let AppliedBase::LegacyScore(score) = applied.base {
                ui::warn(format!(
                    "Scenario '{}' only records a base score of {:.1}; base metrics left unchanged",
                    applied.id, score
                ));
            }
        }

        if let Some(vector) = &self.vector {
            if let Err(reason) = CvssV4Scorer::new().score(vector) {
                eprintln!("{}", diagnostic::rejected_vector(vector, &reason));
                return Err(CliError::VectorRejected);
            }
            let parsed = ParsedVector::parse(vector).map_err(|_| CliError::VectorRejected)?;
            for metric in MetricId::ALL {
                calc.set_metric(metric, parsed.get(metric))
                    .map_err(|e| CliError::Input(e.to_string()))?;
            }
        }

        for (code, value) in &self.metrics {
            calc.set_metric_code(code, value)
                .map_err(|e| CliError::Input(e.to_string()))?;
        }
        for (id, grade) in &self.factors {
            calc.set_factor(*id, *grade);
        }
        if let Some(threat) = self.threat {
            calc.set_threat(threat);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aivss::application::AppConfig;

    fn command(args: &[&str]) -> ScoreCommand {
        let mut argv = vec!["score"];
        argv.extend_from_slice(args);
        ScoreCommand::parse_from(argv)
    }

    fn calculator() -> Calculator {
        let ctx = AppContext {
            config: AppConfig::default(),
        };
        ctx.calculator().unwrap().0
    }

    #[test]
    fn test_overrides_apply_after_scenario() {
        let cmd = command(&[
            "--scenario",
            "customer-support-chatbot",
            "-m",
            "AT=N",
            "-f",
            "autonomy=1",
            "--threat",
            "0.91",
        ]);
        let mut calc = calculator();
        cmd.apply(&mut calc).unwrap();

        let inputs = calc.inputs();
        assert_eq!(inputs.selection.get(MetricId::AttackRequirements), 'N');
        assert_eq!(inputs.factors.get(FactorId::Autonomy), Grade::Full);
        assert_eq!(inputs.factors.get(FactorId::ToolUse), Grade::Partial);
        assert_eq!(inputs.threat, ThreatMultiplier::Unreported);
    }

    #[test]
    fn test_vector_sets_selection() {
        let cmd = command(&[
            "--vector",
            "CVSS:4.0/AV:P/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N",
        ]);
        let mut calc = calculator();
        cmd.apply(&mut calc).unwrap();
        assert_eq!(calc.evaluate().scores.base_score, 7.0);
    }

    #[test]
    fn test_rejected_vector_and_unknown_scenario() {
        let mut calc = calculator();
        let err = command(&["--vector", "CVSS:4.0/AV:N"])
            .apply(&mut calc)
            .unwrap_err();
        assert!(matches!(err, CliError::VectorRejected));

        let err = command(&["--scenario", "nope"]).apply(&mut calc).unwrap_err();
        assert!(matches!(err, CliError::UnknownScenario(_)));
    }

    #[test]
    fn test_bad_factor_is_a_parse_error() {
        assert!(ScoreCommand::try_parse_from(["score", "-f", "autonomy=0.3"]).is_err());
    }
}
