//! Read and normalize one BOM spreadsheet

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::bom::types::{BomError, NormalizedRow, NormalizedTable};

use super::columns;

/// Read the first sheet of a workbook and normalize its rows
///
/// The first row is the header; header names are trimmed before lookup.
/// Format detection is automatic, so `.xls` files work as well as `.xlsx`.
pub fn read_bom_table(bytes: &[u8]) -> Result<NormalizedTable, BomError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| {
        BomError::FileRead {
            message: e.to_string(),
        }
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| BomError::FileRead {
            message: "workbook has no sheets".to_string(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| BomError::FileRead {
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| BomError::Schema {
        // An empty sheet cannot contain the required columns
        column: columns::DESCRIPTION.to_string(),
    })?;
    let cols = parse_header(header)?;

    let mut table = NormalizedTable {
        extra_headers: cols.extras.iter().map(|(name, _)| name.clone()).collect(),
        rows: Vec::new(),
    };

    for row in rows {
        table.rows.push(NormalizedRow {
            part_number: get_cell_string(row, cols.part_number).trim().to_string(),
            description: get_cell_string(row, cols.description).trim().to_string(),
            // Length cells are grouped verbatim, whitespace included
            length: get_cell_string(row, cols.length),
            quantity: get_cell_number(row, cols.qty),
            extras: cols
                .extras
                .iter()
                .map(|&(_, col)| get_cell_string(row, col))
                .collect(),
        });
    }

    Ok(table)
}

/// Resolved header positions for one sheet
struct ColumnIndices {
    part_number: usize,
    description: usize,
    length: usize,
    qty: usize,
    /// Remaining columns, passed through untransformed
    extras: Vec<(String, usize)>,
}

fn parse_header(header: &[Data]) -> Result<ColumnIndices, BomError> {
    let mut part_number = None;
    let mut description = None;
    let mut length = None;
    let mut qty = None;
    let mut extras = Vec::new();

    for (col, cell) in header.iter().enumerate() {
        let name = match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => continue,
            other => other.to_string().trim().to_string(),
        };

        match name.as_str() {
            columns::PART_NUMBER => part_number = Some(col),
            columns::DESCRIPTION => description = Some(col),
            columns::LENGTH => length = Some(col),
            columns::QTY => qty = Some(col),
            _ => extras.push((name, col)),
        }
    }

    Ok(ColumnIndices {
        part_number: require(part_number, columns::PART_NUMBER)?,
        description: require(description, columns::DESCRIPTION)?,
        length: require(length, columns::LENGTH)?,
        qty: require(qty, columns::QTY)?,
        extras,
    })
}

fn require(col: Option<usize>, name: &str) -> Result<usize, BomError> {
    col.ok_or_else(|| BomError::Schema {
        column: name.to_string(),
    })
}

fn get_cell_string(row: &[Data], col: usize) -> String {
    row.get(col)
        .map(|c| match c {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                // Check if it's a whole number
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
}

/// Numeric coercion for quantities; anything unparseable counts as 0
fn get_cell_number(row: &[Data], col: usize) -> f64 {
    row.get(col)
        .and_then(|c| match c {
            Data::Int(i) => Some(*i as f64),
            Data::Float(f) => Some(*f),
            Data::String(s) => s.trim().parse().ok(),
            Data::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    /// Build workbook bytes from string cells, header row first
    fn sheet_bytes(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                worksheet.write_string(r as u32, c as u16, *cell).unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_normalizes_rows() {
        let bytes = sheet_bytes(&[
            &["PART NUMBER", " DESCRIPTION ", "LENGTH", " QTY. "],
            &[" P1 ", " Bracket ", " 10", "5"],
        ]);

        let table = read_bom_table(&bytes).unwrap();
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.part_number, "P1");
        assert_eq!(row.description, "Bracket");
        // Length keeps its whitespace; only the header name is trimmed
        assert_eq!(row.length, " 10");
        assert_eq!(row.quantity, 5.0);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let bytes = sheet_bytes(&[
            &["PART NUMBER", "DESCRIPTION", "LENGTH"],
            &["P1", "Bracket", "10"],
        ]);

        let err = read_bom_table(&bytes).unwrap_err();
        assert_eq!(
            err,
            BomError::Schema {
                column: "QTY.".to_string()
            }
        );
    }

    #[test]
    fn test_garbage_bytes_are_file_read_error() {
        let err = read_bom_table(b"not a spreadsheet").unwrap_err();
        assert!(matches!(err, BomError::FileRead { .. }));
    }

    #[test]
    fn test_blank_and_non_numeric_qty_is_zero() {
        let bytes = sheet_bytes(&[
            &["PART NUMBER", "DESCRIPTION", "LENGTH", "QTY."],
            &["P1", "Bracket", "10", "N/A"],
            &["P2", "Screw", "", ""],
        ]);

        let table = read_bom_table(&bytes).unwrap();
        assert_eq!(table.rows[0].quantity, 0.0);
        assert_eq!(table.rows[1].quantity, 0.0);
    }

    #[test]
    fn test_missing_cells_become_empty_strings() {
        let bytes = sheet_bytes(&[
            &["PART NUMBER", "DESCRIPTION", "LENGTH", "QTY."],
            &["P1"],
        ]);

        let row = &read_bom_table(&bytes).unwrap().rows[0];
        assert_eq!(row.description, "");
        assert_eq!(row.length, "");
        assert_eq!(row.quantity, 0.0);
    }

    #[test]
    fn test_numeric_cells_coerce_to_text() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "PART NUMBER").unwrap();
        worksheet.write_string(0, 1, "DESCRIPTION").unwrap();
        worksheet.write_string(0, 2, "LENGTH").unwrap();
        worksheet.write_string(0, 3, "QTY.").unwrap();
        worksheet.write_number(1, 0, 4711.0).unwrap();
        worksheet.write_string(1, 1, "Tube").unwrap();
        worksheet.write_number(1, 2, 10.0).unwrap();
        worksheet.write_number(1, 3, 2.5).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let row = &read_bom_table(&bytes).unwrap().rows[0];
        assert_eq!(row.part_number, "4711");
        assert_eq!(row.length, "10");
        assert_eq!(row.quantity, 2.5);
    }

    #[test]
    fn test_extra_columns_pass_through() {
        let bytes = sheet_bytes(&[
            &["PART NUMBER", "DESCRIPTION", "LENGTH", "QTY.", " VENDOR "],
            &["P1", "Bracket", "10", "5", "Acme"],
        ]);

        let table = read_bom_table(&bytes).unwrap();
        assert_eq!(table.extra_headers, vec!["VENDOR".to_string()]);
        assert_eq!(table.rows[0].extras, vec!["Acme".to_string()]);
    }
}
