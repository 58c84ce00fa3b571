// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::{to_delimited_text, to_spreadsheet};
use crate::filter::filter_transactions;
use crate::store::LedgerStore;
use crate::utils::filter_spec_from_args;
use anyhow::{Context, Result, anyhow};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let spec = filter_spec_from_args(sub)?;
    let filtered = filter_transactions(store.transactions(), &spec);

    // The serializers happily produce header-only output for an empty
    // view; refusing that is a caller policy, not theirs.
    match fmt.as_str() {
        "csv" => {
            std::fs::write(out, to_delimited_text(&filtered))
                .with_context(|| format!("Write {}", out))?;
        }
        "xlsx" => {
            let bytes = to_spreadsheet(&filtered)?;
            std::fs::write(out, bytes).with_context(|| format!("Write {}", out))?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|xlsx)", fmt)),
    }
    println!("Exported {} transactions to {}", filtered.len(), out);
    Ok(())
}
