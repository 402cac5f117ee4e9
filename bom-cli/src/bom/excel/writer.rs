//! Write merged BOM rows to Excel format

use rust_xlsxwriter::{Format, Workbook};

use crate::bom::types::{BomError, MergedRow};

use super::columns;

/// Sheet name of the exported workbook
pub const SHEET_NAME: &str = "Merged_BOM";

/// Output column order
const OUTPUT_COLUMNS: [&str; 4] = [
    columns::PART_NUMBER,
    columns::DESCRIPTION,
    columns::LENGTH,
    columns::QTY,
];

/// Serialize merged rows to an in-memory `.xlsx` buffer
///
/// Single sheet, bold header row, no index column. The caller decides where
/// the bytes go.
pub fn write_merged_excel(rows: &[MergedRow]) -> Result<Vec<u8>, BomError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();

    for (col, name) in OUTPUT_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let r = (row_idx + 1) as u32;
        worksheet.write_string(r, 0, &row.part_number)?;
        worksheet.write_string(r, 1, &row.description)?;
        worksheet.write_string(r, 2, &row.length)?;
        worksheet.write_number(r, 3, row.quantity)?;
    }

    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx};
    use std::io::Cursor;

    fn merged(part: &str, desc: &str, length: &str, qty: f64) -> MergedRow {
        MergedRow {
            part_number: part.to_string(),
            description: desc.to_string(),
            length: length.to_string(),
            quantity: qty,
        }
    }

    #[test]
    fn test_sheet_name_and_header_row() {
        let buffer = write_merged_excel(&[]).unwrap();

        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buffer)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);

        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        let header: Vec<String> = range.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(header, vec!["PART NUMBER", "DESCRIPTION", "LENGTH", "QTY."]);
        // Header only, no data rows and no index column
        assert_eq!(range.height(), 1);
    }

    #[test]
    fn test_rows_written_in_order() {
        let rows = vec![
            merged("P1", "Bracket", "10", 8.0),
            merged("P2", "Screw", "", 100.0),
        ];
        let buffer = write_merged_excel(&rows).unwrap();

        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buffer)).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        let cells: Vec<Vec<String>> = range
            .rows()
            .skip(1)
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], vec!["P1", "Bracket", "10", "8"]);
        assert_eq!(cells[1], vec!["P2", "Screw", "", "100"]);
    }
}
