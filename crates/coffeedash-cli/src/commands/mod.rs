//! Command implementations

mod config;
mod inspect;
mod kpis;
mod select;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Inspect => inspect::execute(&config, &output),
        Commands::Kpis => kpis::execute(&config, &output),
        Commands::Select(args) => select::execute(args, &config, &output),
        Commands::Config => config::execute(&config, &output),
    }
}
