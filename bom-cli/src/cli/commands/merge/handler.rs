//! Merge command handler

use anyhow::{Context, Result};
use colored::*;
use std::fs;

use super::MergeArgs;
use crate::bom::{
    BomError, SkippedFile, SourceFile, merge_tables, normalize_sources, write_merged_excel,
};

/// Handle the merge command
pub fn handle_merge_command(args: MergeArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    // Unreadable paths follow the same skip policy as unparseable files
    let mut sources = Vec::new();
    let mut skipped: Vec<SkippedFile> = Vec::new();
    for path in &args.files {
        let name = path.display().to_string();
        match fs::read(path) {
            Ok(bytes) => sources.push(SourceFile { name, bytes }),
            Err(err) => skipped.push(SkippedFile {
                file: name,
                error: BomError::FileRead {
                    message: err.to_string(),
                },
            }),
        }
    }

    let (tables, normalize_skips) = normalize_sources(&sources);
    skipped.extend(normalize_skips);

    for skip in &skipped {
        println!(
            "{} '{}': {}",
            "Error processing file".red().bold(),
            skip.file,
            skip.error
        );
    }

    if args.verbose {
        let total_rows: usize = tables.iter().map(|t| t.rows.len()).sum();
        println!("Read {} row(s) from {} file(s)", total_rows, tables.len());
    }

    let rows = match merge_tables(&tables) {
        Ok(rows) => rows,
        Err(err @ BomError::EmptyInput) => {
            println!(
                "{}",
                "No valid data could be processed from the input files.".yellow()
            );
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        let summary = serde_json::json!({
            "items": rows,
            "skipped": skipped
                .iter()
                .map(|s| serde_json::json!({ "file": s.file, "error": s.error.to_string() }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let buffer = write_merged_excel(&rows)?;
    fs::write(&args.output, &buffer)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;

    println!(
        "Merged {} item(s) from {} file(s) into {}",
        rows.len().to_string().bold(),
        tables.len(),
        args.output.display().to_string().cyan()
    );

    Ok(())
}
