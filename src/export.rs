// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Serialization of a transaction view into the two interchange formats.
//! Both share one field mapping: Fecha, Tipo (Spanish label), Categoría,
//! Descripción, Monto (signed: negative for expenses). Writing the bytes
//! anywhere is the caller's job.

use crate::models::Transaction;
use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;

pub const EXPORT_HEADERS: [&str; 5] = ["Fecha", "Tipo", "Categoría", "Descripción", "Monto"];
pub const SHEET_NAME: &str = "Transacciones";

// Character-width hints per column, same order as EXPORT_HEADERS.
const COLUMN_WIDTHS: [f64; 5] = [12.0, 10.0, 15.0, 30.0, 15.0];

fn row_cells(t: &Transaction) -> [String; 5] {
    [
        t.date.to_string(),
        t.r#type.label_es().to_string(),
        t.category.clone(),
        t.description.clone(),
        t.signed_amount().to_string(),
    ]
}

/// Delimited-text rendition: the header row unquoted, then every data
/// cell wrapped in double quotes, rows joined by `\n`. Embedded double
/// quotes in free text are not escaped; that is a fixed limitation of
/// the format, not an error.
pub fn to_delimited_text(transactions: &[Transaction]) -> String {
    let mut lines = Vec::with_capacity(transactions.len() + 1);
    lines.push(EXPORT_HEADERS.join(","));
    for t in transactions {
        let quoted: Vec<String> = row_cells(t).iter().map(|c| format!("\"{c}\"")).collect();
        lines.push(quoted.join(","));
    }
    lines.join("\n")
}

/// Single-sheet xlsx workbook with the same header and row mapping as the
/// delimited text, Monto as a number cell. An empty input yields a
/// header-only sheet.
pub fn to_spreadsheet(transactions: &[Transaction]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    for (i, t) in transactions.iter().enumerate() {
        let row = i as u32 + 1;
        let [date, tipo, category, description, _] = row_cells(t);
        sheet.write_string(row, 0, date)?;
        sheet.write_string(row, 1, tipo)?;
        sheet.write_string(row, 2, category)?;
        sheet.write_string(row, 3, description)?;
        sheet.write_number(row, 4, t.signed_amount().to_f64().unwrap_or_default())?;
    }
    Ok(workbook.save_to_buffer()?)
}
