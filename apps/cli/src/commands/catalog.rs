use crate::ui::{render, Theme};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct CatalogCommand {
    /// Only list the agentic AI risk factors
    #[arg(long)]
    pub factors_only: bool,
}

impl CatalogCommand {
    pub fn execute(self) -> Result<()> {
        if !self.factors_only {
            for (group, table) in render::metric_catalog_tables() {
                println!("{}\n{}\n", Theme::primary(group), table);
            }
        }
        println!(
            "{}\n{}",
            Theme::secondary("Agentic AI Risk Factors"),
            render::factor_catalog_table()
        );
        Ok(())
    }
}
