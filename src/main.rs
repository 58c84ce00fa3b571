// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finanzapp::{cli, commands, store::LedgerStore, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = match matches.get_one::<String>("ledger") {
        Some(path) => LedgerStore::from_rows(utils::read_ledger_csv(path)?),
        None => LedgerStore::seeded(),
    };

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("account", sub)) => commands::accounts::handle(&store, sub)?,
        Some(("loan", sub)) => commands::loans::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
