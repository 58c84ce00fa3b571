// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::filter::FilterSpec;
use crate::models::NewTransaction;

pub const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Spanish month name for a 0-indexed month.
pub fn month_name(month0: u32) -> &'static str {
    MONTHS_ES.get(month0 as usize).copied().unwrap_or("?")
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Reads ledger rows from a CSV file with a
/// `type,amount,category,description,date[,account_id]` header.
pub fn read_ledger_csv(path: &str) -> Result<Vec<NewTransaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open ledger CSV {}", path))?;
    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let row: NewTransaction =
            result.with_context(|| format!("Malformed row {} in {}", i + 1, path))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Builds a filter spec from the shared `--month/--year/--type` flags.
/// The flag takes a human 1-based month; the spec stores it 0-based.
pub fn filter_spec_from_args(sub: &clap::ArgMatches) -> Result<FilterSpec> {
    let month = sub.get_one::<u32>("month").map(|m| m - 1);
    let year = sub.get_one::<i32>("year").copied();
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse())
        .transpose()?;
    Ok(FilterSpec {
        month,
        year,
        r#type: kind,
    })
}
