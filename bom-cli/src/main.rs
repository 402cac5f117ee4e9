mod bom;
mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Merge(args) => cli::commands::merge::handle_merge_command(args),
    }
}
