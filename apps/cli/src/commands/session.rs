use crate::core::context::{AppContext, Calculator};
use crate::core::error::CliError;
use crate::core::parse;
use crate::ui::render::{self, OutputFormat};
use crate::ui::{Icon, Theme};
use aivss::application::AppliedBase;
use aivss::domain::profile::SlotChange;
use aivss::domain::scoring::round_display;
use aivss::domain::ProfileId;
use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  show                     scores, base metrics and factors
  score                    one line summary
  set <METRIC> <VALUE>     change a base metric, e.g. `set AV L`
  factor <ID> <GRADE>      grade a factor, e.g. `factor autonomy 1`
  threat <VALUE>           1, 0.97, 0.91 or attacked / proof-of-concept / unreported
  scenarios                list presets
  scenario <ID>            apply a preset
  save <NAME>              snapshot the current inputs
  profiles                 list saved profiles
  load <ID>                restore a profile
  delete <ID>              delete a profile
  compare <ID>             toggle a profile in the comparison slots
  uncompare                clear both comparison slots
  comparison               show the compared profiles
  chart                    factor grades as bars
  report [FORMAT]          table, json, yaml or toml
  reset                    back to the starting inputs
  help                     this text
  quit                     leave the session";

#[derive(Parser, Debug, Clone)]
pub struct SessionCommand {}

impl SessionCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let (calc, loaded) = ctx.calculator()?;
        let interactive = console::Term::stdout().is_term();

        if interactive {
            cliclack::intro(console::style("AIVSS Calculator").bold())?;
            cliclack::log::info(format!("Scenario catalog: {}", loaded.source))?;
            cliclack::log::remark("Type `help` for commands, `quit` to leave.")?;
        }

        let stdin = std::io::stdin();
        let mut session = Session::new(calc);
        session.run(stdin.lock(), std::io::stdout(), interactive)?;

        if interactive {
            cliclack::outro("Session closed. Profiles live only as long as the session.")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line oriented driver over one calculator session
pub struct Session {
    calc: Calculator,
}

impl Session {
    pub fn new(calc: Calculator) -> Self {
        Self { calc }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Read commands until `quit` or end of input. Command errors are
    /// reported inline and do not end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W, prompt: bool) -> Result<()> {
        if prompt {
            write!(out, "aivss> ")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            match self.handle(&line, &mut out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    writeln!(out, "{} {}", Theme::error(Icon::Cross), e)?;
                    if let Some(help) = e.suggestion() {
                        writeln!(out, "  {}", Theme::muted(help))?;
                    }
                }
            }

            if prompt {
                write!(out, "aivss> ")?;
                out.flush()?;
            }
        }
        Ok(())
    }

    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, CliError> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        match command.to_lowercase().as_str() {
            "" => {}
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "show" => self.show(out)?,
            "score" => self.score_line(out)?,
            "set" => {
                let (code, value) = pair(rest)
                    .map(Ok)
                    .unwrap_or_else(|| parse::metric_assignment(rest))?;
                self.calc
                    .set_metric_code(&code, &value)
                    .map_err(|e| CliError::Input(e.to_string()))?;
                self.score_line(out)?;
            }
            "factor" => {
                let (id, grade) = match pair(rest) {
                    Some((id, grade)) => parse::factor_assignment(&format!("{}={}", id, grade))?,
                    None => parse::factor_assignment(rest)?,
                };
                self.calc.set_factor(id, grade);
                self.score_line(out)?;
            }
            "threat" => {
                let threat = parse::threat(rest)?;
                self.calc.set_threat(threat);
                self.score_line(out)?;
            }
            "scenarios" => writeln!(out, "{}", render::scenarios_table(self.calc.catalog()))?,
            "scenario" => {
                let applied = self
                    .calc
                    .apply_scenario(rest)
                    .map_err(|e| CliError::Catalog(format!("{:#}", e)))?
                    .ok_or_else(|| CliError::UnknownScenario(rest.to_string()))?;
                writeln!(out, "{} Applied '{}'", Icon::Check, applied.name)?;
                if let AppliedBase::LegacyScore(score) = applied.base {
                    writeln!(
                        out,
                        "  preset records a base score of {:.1}; base metrics unchanged",
                        score
                    )?;
                }
                self.score_line(out)?;
            }
            "save" => {
                let profile = self
                    .calc
                    .save_profile(rest)
                    .map_err(|e| CliError::Input(e.to_string()))?;
                writeln!(
                    out,
                    "{} Saved profile #{} '{}'",
                    Icon::Check,
                    profile.id,
                    profile.name
                )?;
            }
            "profiles" => {
                if self.calc.profiles().is_empty() {
                    writeln!(out, "No saved profiles")?;
                } else {
                    let compared = self.calc.comparison();
                    writeln!(
                        out,
                        "{}",
                        render::profiles_table(self.calc.profiles(), &compared)
                    )?;
                }
            }
            "load" => {
                let id = profile_id(rest)?;
                if !self.calc.load_profile(id) {
                    return Err(CliError::Input(format!("no profile #{}", id)));
                }
                writeln!(out, "{} Loaded profile #{}", Icon::Check, id)?;
                self.score_line(out)?;
            }
            "delete" => {
                let id = profile_id(rest)?;
                let removed = self
                    .calc
                    .delete_profile(id)
                    .ok_or_else(|| CliError::Input(format!("no profile #{}", id)))?;
                writeln!(out, "{} Deleted profile #{} '{}'", Icon::Check, id, removed.name)?;
            }
            "compare" => {
                let id = profile_id(rest)?;
                let change = self
                    .calc
                    .toggle_compare(id)
                    .ok_or_else(|| CliError::Input(format!("no profile #{}", id)))?;
                match change {
                    SlotChange::Added { slot } => {
                        writeln!(out, "Profile #{} in slot {}", id, slot + 1)?
                    }
                    SlotChange::Removed { slot } => {
                        writeln!(out, "Profile #{} removed from slot {}", id, slot + 1)?
                    }
                    SlotChange::Replaced { slot, previous } => writeln!(
                        out,
                        "Profile #{} replaced #{} in slot {}",
                        id,
                        previous,
                        slot + 1
                    )?,
                }
                self.comparison(out)?;
            }
            "uncompare" => {
                self.calc.clear_comparison();
                writeln!(out, "Comparison cleared")?;
            }
            "comparison" => self.comparison(out)?,
            "chart" => self.chart(out)?,
            "report" => {
                let format = if rest.is_empty() {
                    OutputFormat::Table
                } else {
                    OutputFormat::parse(rest)
                        .ok_or_else(|| CliError::Input(format!("unknown format '{}'", rest)))?
                };
                let report = render::export(&self.calc.report(), format)
                    .map_err(|e| CliError::Input(format!("{:#}", e)))?;
                writeln!(out, "{}", report)?;
            }
            "reset" => {
                self.calc.reset();
                writeln!(out, "Inputs reset")?;
                self.score_line(out)?;
            }
            other => {
                return Err(CliError::Input(format!(
                    "unknown command '{}', try `help`",
                    other
                )))
            }
        }
        Ok(Flow::Continue)
    }

    fn score_line<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let evaluation = self.calc.evaluate();
        let scores = evaluation.scores;
        writeln!(
            out,
            "{} {:.1} {}  {}",
            Icon::Shield,
            round_display(scores.composite_score),
            Theme::risk(scores.risk_level(), scores.risk_level()),
            Theme::muted(&evaluation.summary_vector)
        )?;
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let evaluation = self.calc.evaluate();
        let inputs = self.calc.inputs();
        writeln!(out, "{}", render::scores_table(&evaluation, inputs.threat))?;
        writeln!(out, "{}", Theme::muted(&evaluation.base_vector))?;
        writeln!(out, "{}", render::selection_table(&inputs.selection))?;
        writeln!(out, "{}", render::factors_table(&inputs.factors))?;
        Ok(())
    }

    fn comparison<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let compared = self.calc.comparison();
        if compared.is_empty() {
            writeln!(out, "No profiles selected for comparison")?;
        } else {
            writeln!(out, "{}", render::comparison_table(&compared))?;
        }
        Ok(())
    }

    fn chart<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        const WIDTH: usize = 20;
        let chart = self.calc.chart_data();
        for point in &chart.factors {
            let filled = (point.value * WIDTH as f64).round() as usize;
            writeln!(
                out,
                "{:<12} {}{} {:.1}",
                point.label,
                "█".repeat(filled),
                "·".repeat(WIDTH - filled),
                point.value
            )?;
        }
        writeln!(
            out,
            "Base {:.1} | AARS {:.1}",
            round_display(chart.base_score),
            round_display(chart.secondary_score)
        )?;
        Ok(())
    }
}

/// `AV N` style argument pair
fn pair(rest: &str) -> Option<(String, String)> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a.to_string(), b.to_string())),
        _ => None,
    }
}

fn profile_id(rest: &str) -> Result<ProfileId, CliError> {
    rest.parse()
        .map_err(|_| CliError::Input(format!("expected a profile id, got '{}'", rest)))
}
