// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::available_years;
use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("trend", sub)) => trend(store, sub)?,
        Some(("years", sub)) => years(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn trend(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let history = store.monthly_history();
    if !maybe_print_json(json_flag, jsonl_flag, &history)? {
        let rows: Vec<Vec<String>> = history
            .iter()
            .map(|p| {
                vec![
                    p.month.clone(),
                    fmt_money(&p.income),
                    fmt_money(&p.expenses),
                    fmt_money(&p.profit),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Mes", "Ingresos", "Gastos", "Utilidad"], rows)
        );
    }
    Ok(())
}

fn years(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let years = available_years(store.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &years)? {
        let rows: Vec<Vec<String>> = years.iter().map(|y| vec![y.to_string()]).collect();
        println!("{}", pretty_table(&["Año"], rows));
    }
    Ok(())
}
