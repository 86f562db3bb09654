//! ragenda library root.
//! Exposes the Jalali calendar core, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod jalali;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::clock_for;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Normalize { .. } => cli::commands::normalize::handle(&cli.command),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command),
        Commands::Days { .. } => {
            let clock = clock_for(cli)?;
            cli::commands::days::handle(&cli.command, cfg, clock.as_ref())
        }
        Commands::Grid { .. } => cli::commands::grid::handle(cli, cfg),
        Commands::Agenda { .. } => cli::commands::agenda::handle(cli, cfg),
        Commands::Birthday { .. } => {
            let clock = clock_for(cli)?;
            cli::commands::birthday::handle(&cli.command, clock.as_ref())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logging::init_tracing(cli.verbose, cli.quiet);

    // config is loaded once and shared by every command
    let cfg = Config::load()?;

    dispatch(&cli, &cfg)
}
