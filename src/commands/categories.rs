// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionType;
use crate::seed::suggested_categories;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let kinds: Vec<TransactionType> = match m.get_one::<String>("type") {
        Some(s) => vec![s.parse()?],
        None => vec![TransactionType::Income, TransactionType::Expense],
    };
    let mut rows = Vec::new();
    for kind in kinds {
        for cat in suggested_categories(kind) {
            rows.push(vec![kind.label_es().to_string(), (*cat).to_string()]);
        }
    }
    println!("{}", pretty_table(&["Tipo", "Categoría"], rows));
    Ok(())
}
