// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::{filter_transactions, totals};
use crate::models::{NewTransaction, TransactionPatch, TransactionType};
use crate::store::LedgerStore;
use crate::utils::{
    filter_spec_from_args, fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::{Result, ensure};
use rust_decimal::Decimal;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    // The store itself accepts anything well-formed; rejecting nonsense
    // input is this entry form's job.
    ensure!(amount >= Decimal::ZERO, "Amount must be non-negative");
    let category = sub.get_one::<String>("category").unwrap().to_string();
    ensure!(!category.is_empty(), "Category must not be empty");
    let description = sub.get_one::<String>("description").unwrap().to_string();
    ensure!(!description.is_empty(), "Description must not be empty");
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let account_id = sub.get_one::<String>("account").map(|s| s.to_string());

    let t = store.add_transaction(NewTransaction {
        r#type: kind,
        amount,
        category,
        description,
        date,
        account_id,
    });
    println!(
        "Recorded {} of {} on {} (id: {})",
        t.r#type.label_es(),
        fmt_money(&t.amount),
        t.date,
        t.id
    );
    Ok(())
}

fn update(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    // Same form guards as `add`: a patch must not break the stored
    // invariants either.
    let amount = sub
        .get_one::<String>("amount")
        .map(|s| parse_decimal(s))
        .transpose()?;
    if let Some(amount) = amount {
        ensure!(amount >= Decimal::ZERO, "Amount must be non-negative");
    }
    let category = sub.get_one::<String>("category").map(|s| s.to_string());
    if let Some(category) = &category {
        ensure!(!category.is_empty(), "Category must not be empty");
    }
    let description = sub.get_one::<String>("description").map(|s| s.to_string());
    if let Some(description) = &description {
        ensure!(!description.is_empty(), "Description must not be empty");
    }
    let patch = TransactionPatch {
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse())
            .transpose()?,
        amount,
        category,
        description,
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
        account_id: sub.get_one::<String>("account").map(|s| s.to_string()),
    };
    if store.update_transaction(id, patch) {
        println!("Updated transaction {}", id);
    } else {
        println!("No transaction with id '{}'", id);
    }
    Ok(())
}

fn delete(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.delete_transaction(id) {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id '{}'", id);
    }
    Ok(())
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let spec = filter_spec_from_args(sub)?;
    let filtered = filter_transactions(store.transactions(), &spec);
    let shown: Vec<_> = match sub.get_one::<usize>("limit") {
        Some(&limit) => filtered.iter().take(limit).cloned().collect(),
        None => filtered.clone(),
    };
    if maybe_print_json(json_flag, jsonl_flag, &shown)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = shown
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.date.to_string(),
                t.r#type.label_es().to_string(),
                t.category.clone(),
                t.description.clone(),
                fmt_money(&t.signed_amount()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Fecha", "Tipo", "Categoría", "Descripción", "Monto"],
            rows,
        )
    );
    // Totals always cover the whole filtered view, not just shown rows.
    let sums = totals(&filtered);
    println!(
        "{} transacciones | Ingresos: {} | Gastos: {} | Balance: {}",
        filtered.len(),
        fmt_money(&sums.income),
        fmt_money(&sums.expenses),
        fmt_money(&sums.balance)
    );
    Ok(())
}
