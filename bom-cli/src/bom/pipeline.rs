//! The merge pipeline: named file byte streams in, merged rows out

use crate::bom::aggregate::merge_tables;
use crate::bom::excel::read_bom_table;
use crate::bom::types::{BomError, MergeOutcome, NormalizedTable, SkippedFile, SourceFile};

/// Normalize each source, skipping files that fail to parse
///
/// Per-file failures are non-fatal: the file is recorded as skipped and the
/// remaining sources are still processed.
pub fn normalize_sources(sources: &[SourceFile]) -> (Vec<NormalizedTable>, Vec<SkippedFile>) {
    let mut tables = Vec::new();
    let mut skipped = Vec::new();

    for source in sources {
        match read_bom_table(&source.bytes) {
            Ok(table) => {
                log::debug!("normalized {} row(s) from {}", table.rows.len(), source.name);
                tables.push(table);
            }
            Err(error) => {
                log::warn!("skipping {}: {}", source.name, error);
                skipped.push(SkippedFile {
                    file: source.name.clone(),
                    error,
                });
            }
        }
    }

    (tables, skipped)
}

/// Merge a sequence of BOM files into one consolidated table
///
/// Returns `BomError::EmptyInput` when no source normalizes successfully,
/// including the zero-source case; the merge step is not attempted then.
pub fn merge_sources(sources: &[SourceFile]) -> Result<MergeOutcome, BomError> {
    let (tables, skipped) = normalize_sources(sources);

    let rows = merge_tables(&tables)?;
    log::info!(
        "merged {} file(s) into {} item(s), {} file(s) skipped",
        tables.len(),
        rows.len(),
        skipped.len()
    );

    Ok(MergeOutcome { rows, skipped })
}
