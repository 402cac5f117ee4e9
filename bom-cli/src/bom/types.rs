//! Core data model for the BOM merge pipeline

use serde::Serialize;

/// One input file queued for merging
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Display name used in skip reports (usually the path)
    pub name: String,
    pub bytes: Vec<u8>,
}

/// A single BOM row after field coercion
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub part_number: String,
    pub description: String,
    pub length: String,
    pub quantity: f64,
    /// Cells of pass-through columns, in `NormalizedTable::extra_headers` order
    pub extras: Vec<String>,
}

/// One input file's rows after column-name trimming and field coercion
#[derive(Debug, Clone, Default)]
pub struct NormalizedTable {
    /// Trimmed names of columns outside the four semantic ones, in sheet order
    pub extra_headers: Vec<String>,
    pub rows: Vec<NormalizedRow>,
}

/// One aggregated output record per distinct (description, length) key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    pub part_number: String,
    pub description: String,
    pub length: String,
    pub quantity: f64,
}

/// A file excluded from the merge, with the reason
#[derive(Debug)]
pub struct SkippedFile {
    pub file: String,
    pub error: BomError,
}

/// Result of one merge run
#[derive(Debug)]
pub struct MergeOutcome {
    pub rows: Vec<MergedRow>,
    pub skipped: Vec<SkippedFile>,
}

/// Errors from the merge pipeline
///
/// `FileRead` and `Schema` are per-file and non-fatal: the offending file is
/// skipped and the run continues. `EmptyInput` is terminal for the run,
/// `Encoding` for the export attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BomError {
    /// Input bytes could not be parsed as a spreadsheet workbook
    FileRead { message: String },
    /// A required column is missing from the header row
    Schema { column: String },
    /// No input file normalized successfully
    EmptyInput,
    /// Export serialization failed
    Encoding { message: String },
}

impl std::fmt::Display for BomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BomError::FileRead { message } => {
                write!(f, "not a readable spreadsheet: {}", message)
            }
            BomError::Schema { column } => {
                write!(f, "required column '{}' not found in header row", column)
            }
            BomError::EmptyInput => write!(f, "no usable data in any input file"),
            BomError::Encoding { message } => {
                write!(f, "failed to encode output workbook: {}", message)
            }
        }
    }
}

impl std::error::Error for BomError {}

impl From<rust_xlsxwriter::XlsxError> for BomError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        BomError::Encoding {
            message: err.to_string(),
        }
    }
}
