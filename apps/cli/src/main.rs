mod commands;
mod core;
mod ui;

use clap::{Parser, Subcommand};
use commands::{
    catalog::CatalogCommand, scenarios::ScenariosCommand, score::ScoreCommand,
    session::SessionCommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aivss")]
#[command(version, about = "Agentic AI vulnerability scoring (AIVSS) calculator", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.aivss/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scenario catalog (YAML, TOML or JSON) replacing the builtin presets
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one assessment and print or export the report
    Score(ScoreCommand),
    /// List base metrics and agentic factors
    Catalog(CatalogCommand),
    /// List scenario presets and catalog validation results
    Scenarios(ScenariosCommand),
    /// Interactive calculator with profiles and comparison
    Session(SessionCommand),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<core::error::CliError>() {
            Some(cli_error) => cli_error.render(),
            None => ui::error(format!("{:#}", e)),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let log_level = core::context::init_tracing(cli.verbose);
    let ctx = core::context::AppContext::load(cli.config, cli.catalog)?;
    log_level.apply_configured(&ctx.config.log_level);
    tracing::debug!(config = ?ctx.config, "Configuration loaded");

    match cli.command {
        Commands::Score(cmd) => cmd.execute(&ctx),
        Commands::Catalog(cmd) => cmd.execute(),
        Commands::Scenarios(cmd) => cmd.execute(&ctx),
        Commands::Session(cmd) => cmd.execute(&ctx),
    }
}
