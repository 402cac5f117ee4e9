//! Merge command: combine BOM spreadsheets by summing matching items

pub mod handler;

pub use handler::handle_merge_command;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// BOM spreadsheet files to merge (.xlsx or .xls)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path of the merged output workbook
    #[arg(short, long, default_value = "merged_bom.xlsx")]
    pub output: PathBuf,

    /// Print the merged items as JSON to stdout instead of writing a workbook
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show how many rows were read before merging
    #[arg(short, long)]
    pub verbose: bool,
}
