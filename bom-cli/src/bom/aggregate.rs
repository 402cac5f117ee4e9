//! Concatenate normalized tables and perform the grouped sum

use std::collections::HashMap;

use crate::bom::types::{BomError, MergedRow, NormalizedTable};

/// Merge normalized tables into one row per (description, length) key
///
/// Tables are concatenated in the order given, preserving in-file row order.
/// Each group's quantities are summed and the first member fixes the part
/// number. Groups with a blank description are dropped, and the result is
/// sorted ascending by (description, length).
pub fn merge_tables(tables: &[NormalizedTable]) -> Result<Vec<MergedRow>, BomError> {
    if tables.is_empty() {
        return Err(BomError::EmptyInput);
    }

    // Groups are created in combined-table order; the slot map points each
    // key at its row so later members only add their quantity
    let mut merged: Vec<MergedRow> = Vec::new();
    let mut slots: HashMap<(String, String), usize> = HashMap::new();

    for table in tables {
        for row in &table.rows {
            let key = (row.description.clone(), row.length.clone());
            match slots.get(&key) {
                Some(&slot) => merged[slot].quantity += row.quantity,
                None => {
                    slots.insert(key, merged.len());
                    merged.push(MergedRow {
                        part_number: row.part_number.clone(),
                        description: row.description.clone(),
                        length: row.length.clone(),
                        quantity: row.quantity,
                    });
                }
            }
        }
    }

    // Blank descriptions usually come from empty spreadsheet rows
    merged.retain(|row| !row.description.is_empty());

    // Vec::sort_by is stable, so equal keys keep group-creation order
    merged.sort_by(|a, b| {
        (a.description.as_str(), a.length.as_str())
            .cmp(&(b.description.as_str(), b.length.as_str()))
    });

    Ok(merged)
}
