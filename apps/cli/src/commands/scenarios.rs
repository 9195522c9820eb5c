use crate::core::context::AppContext;
use crate::ui::{self, render, Theme};
use aivss_scenarios::ValidationLevel;
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct ScenariosCommand {}

impl ScenariosCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let (_, loaded) = ctx.calculator()?;

        println!(
            "{} {}",
            Theme::primary("Scenario presets"),
            Theme::muted(format!("({})", loaded.source))
        );
        println!("{}", render::scenarios_table(&loaded.catalog));

        for issue in &loaded.validation.issues {
            let line = format!("{}: {}", issue.field, issue.message);
            match issue.level {
                ValidationLevel::Error => ui::error(line),
                ValidationLevel::Warning => ui::warn(line),
            }
        }
        Ok(())
    }
}
