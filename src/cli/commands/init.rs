use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and writes a default configuration file.
/// In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { events_file, force } = &cli.command {
        let cfg = Config::init_all(events_file.clone(), *force, cli.test)?;

        info(format!("Config file : {}", Config::config_file().display()));
        info(format!("Events file : {}", cfg.events_file));
        info(format!("Day count   : {:?}", cfg.day_count));
        success("ragenda initialization completed!");
    }
    Ok(())
}
