//! Excel import/export for BOM tables

pub mod reader;
pub mod writer;

pub use reader::read_bom_table;
pub use writer::{SHEET_NAME, write_merged_excel};

/// Column names shared by the input schema and the exported sheet
pub mod columns {
    pub const PART_NUMBER: &str = "PART NUMBER";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const LENGTH: &str = "LENGTH";
    pub const QTY: &str = "QTY.";
}
