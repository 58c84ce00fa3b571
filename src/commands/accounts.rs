// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let accounts = store.accounts();
            if !maybe_print_json(json_flag, jsonl_flag, &accounts)? {
                let rows: Vec<Vec<String>> = accounts
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.clone(),
                            a.name.clone(),
                            a.r#type.to_string(),
                            fmt_money(&a.balance),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Nombre", "Tipo", "Saldo"], rows));
                println!("Balance Total: {}", fmt_money(&store.total_balance()));
            }
        }
        _ => {}
    }
    Ok(())
}
