// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let loans = store.loans();
            if !maybe_print_json(json_flag, jsonl_flag, &loans)? {
                let rows: Vec<Vec<String>> = loans
                    .iter()
                    .map(|l| {
                        vec![
                            l.id.clone(),
                            l.name.clone(),
                            l.r#type.to_string(),
                            fmt_money(&l.total_amount),
                            fmt_money(&l.remaining_amount),
                            fmt_money(&l.monthly_payment),
                            format!("{:.1}%", l.interest_rate),
                            format!("{:.1}%", l.progress() * Decimal::ONE_HUNDRED),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &[
                            "ID", "Nombre", "Tipo", "Total", "Restante", "Pago Mensual", "Tasa",
                            "Progreso",
                        ],
                        rows,
                    )
                );
                println!("Deuda Total: {}", fmt_money(&store.total_debt()));
            }
        }
        _ => {}
    }
    Ok(())
}
