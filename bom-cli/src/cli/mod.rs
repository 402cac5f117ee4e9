//! Command-line interface definitions

pub mod commands;

use clap::{Parser, Subcommand};

use commands::merge::MergeArgs;

/// Merge spreadsheet bills of materials
#[derive(Parser)]
#[command(name = "bom-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge BOM files by summing quantities of matching items
    Merge(MergeArgs),
}
