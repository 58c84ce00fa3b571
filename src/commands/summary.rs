// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, month_name, parse_date, pretty_table};
use anyhow::Result;
use chrono::Datelike;
use serde_json::json;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let today = match m.get_one::<String>("today") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let month = store.month_summary(today);
    let payload = json!({
        "total_balance": store.total_balance(),
        "total_debt": store.total_debt(),
        "month": month,
    });
    if maybe_print_json(json_flag, jsonl_flag, &payload)? {
        return Ok(());
    }

    let label = format!("{} {}", month_name(today.month0()), today.year());
    let rows = vec![
        vec!["Balance Total".to_string(), fmt_money(&store.total_balance())],
        vec!["Deuda Total".to_string(), fmt_money(&store.total_debt())],
        vec![format!("Ingresos ({})", label), fmt_money(&month.income)],
        vec![format!("Gastos ({})", label), fmt_money(&month.expenses)],
        vec![format!("Utilidad ({})", label), fmt_money(&month.profit)],
    ];
    println!("{}", pretty_table(&["Indicador", "Monto"], rows));
    Ok(())
}
