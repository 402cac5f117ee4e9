//! Merging of spreadsheet bills of materials
//!
//! Rows from every input file are grouped by (description, length); each
//! group's quantities are summed and one representative part number is kept.
//! All tables are invocation-scoped; nothing persists beyond the exported
//! workbook bytes.

pub mod aggregate;
pub mod excel;
pub mod pipeline;
pub mod types;

pub use aggregate::merge_tables;
pub use excel::{read_bom_table, write_merged_excel};
pub use pipeline::{merge_sources, normalize_sources};
pub use types::*;
