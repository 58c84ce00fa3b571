// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finanzapp::models::{
    Loan, LoanType, NewTransaction, TransactionPatch, TransactionType,
};
use finanzapp::store::LedgerStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_tx(kind: TransactionType, amount: Decimal, when: NaiveDate) -> NewTransaction {
    NewTransaction {
        r#type: kind,
        amount,
        category: "Otros".to_string(),
        description: "test".to_string(),
        date: when,
        account_id: None,
    }
}

#[test]
fn seeded_store_matches_sample_data() {
    let store = LedgerStore::seeded();
    assert_eq!(store.transactions().len(), 22);
    assert_eq!(store.accounts().len(), 4);
    assert_eq!(store.loans().len(), 3);
    assert_eq!(store.monthly_history().len(), 6);

    let ids: HashSet<&str> = store.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 22);
    assert!(store.transactions().iter().all(|t| t.amount >= Decimal::ZERO));
}

#[test]
fn balance_and_debt_sum_the_seed_data() {
    let store = LedgerStore::seeded();
    assert_eq!(store.total_balance(), dec!(288500));
    assert_eq!(store.total_debt(), dec!(2345000));
}

#[test]
fn add_assigns_fresh_ids_and_inserts_at_head() {
    let mut store = LedgerStore::seeded();
    let first = store
        .add_transaction(new_tx(TransactionType::Income, dec!(100), date(2025, 1, 2)))
        .id
        .clone();
    let second = store
        .add_transaction(new_tx(TransactionType::Expense, dec!(50), date(2025, 1, 3)))
        .id
        .clone();
    assert_ne!(first, second);
    assert_eq!(store.transactions().len(), 24);
    // Head insertion: the latest add comes first.
    assert_eq!(store.transactions()[0].id, second);
    assert_eq!(store.transactions()[1].id, first);
    // Fresh ids never collide with any seed id.
    let seed_ids: HashSet<String> = (1..=22).map(|i| i.to_string()).collect();
    assert!(!seed_ids.contains(&first));
    assert!(!seed_ids.contains(&second));
}

#[test]
fn added_ids_are_pairwise_distinct() {
    let mut store = LedgerStore::from_rows(Vec::new());
    let mut ids = HashSet::new();
    for i in 0..50 {
        let id = store
            .add_transaction(new_tx(
                TransactionType::Income,
                Decimal::from(i),
                date(2025, 1, 1),
            ))
            .id
            .clone();
        assert!(ids.insert(id));
    }
}

#[test]
fn update_merges_patch_and_is_idempotent() {
    let mut store = LedgerStore::seeded();
    let patch = TransactionPatch {
        amount: Some(dec!(13000)),
        description: Some("Renta ajustada".to_string()),
        ..TransactionPatch::default()
    };
    assert!(store.update_transaction("3", patch.clone()));
    let after_once = store
        .transactions()
        .iter()
        .find(|t| t.id == "3")
        .cloned()
        .unwrap();
    assert_eq!(after_once.amount, dec!(13000));
    assert_eq!(after_once.description, "Renta ajustada");
    // Untouched fields survive the patch.
    assert_eq!(after_once.category, "Renta");
    assert_eq!(after_once.r#type, TransactionType::Expense);

    assert!(store.update_transaction("3", patch));
    let after_twice = store
        .transactions()
        .iter()
        .find(|t| t.id == "3")
        .cloned()
        .unwrap();
    assert_eq!(after_twice.amount, after_once.amount);
    assert_eq!(after_twice.description, after_once.description);
}

#[test]
fn update_of_unknown_id_is_a_silent_noop() {
    let mut store = LedgerStore::seeded();
    let before: Vec<String> = store.transactions().iter().map(|t| t.id.clone()).collect();
    assert!(!store.update_transaction(
        "999",
        TransactionPatch {
            amount: Some(dec!(1)),
            ..TransactionPatch::default()
        }
    ));
    let after: Vec<String> = store.transactions().iter().map(|t| t.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn delete_removes_and_tolerates_missing_ids() {
    let mut store = LedgerStore::seeded();
    assert!(store.delete_transaction("1"));
    assert_eq!(store.transactions().len(), 21);
    assert!(store.transactions().iter().all(|t| t.id != "1"));
    assert!(!store.delete_transaction("1"));
    assert_eq!(store.transactions().len(), 21);
}

#[test]
fn month_summary_uses_the_injected_date() {
    let store = LedgerStore::seeded();

    let december = store.month_summary(date(2024, 12, 18));
    assert_eq!(december.income, dec!(120000));
    assert_eq!(december.expenses, dec!(41000));
    assert_eq!(december.profit, dec!(79000));

    let empty_month = store.month_summary(date(2023, 1, 15));
    assert_eq!(empty_month.income, Decimal::ZERO);
    assert_eq!(empty_month.expenses, Decimal::ZERO);
    assert_eq!(empty_month.profit, Decimal::ZERO);
}

#[test]
fn loan_progress_is_derived_from_amounts() {
    let store = LedgerStore::seeded();
    let mortgage = &store.loans()[0];
    assert_eq!(mortgage.progress(), dec!(0.14));

    let zero_total = Loan {
        id: "x".to_string(),
        name: "Nada".to_string(),
        r#type: LoanType::Personal,
        total_amount: Decimal::ZERO,
        remaining_amount: Decimal::ZERO,
        monthly_payment: Decimal::ZERO,
        interest_rate: Decimal::ZERO,
    };
    assert_eq!(zero_total.progress(), Decimal::ZERO);
}

#[test]
fn from_rows_preserves_order_and_numbers_sequentially() {
    let rows = vec![
        new_tx(TransactionType::Income, dec!(10), date(2025, 3, 1)),
        new_tx(TransactionType::Expense, dec!(20), date(2025, 3, 2)),
        new_tx(TransactionType::Income, dec!(30), date(2025, 3, 3)),
    ];
    let store = LedgerStore::from_rows(rows);
    let ids: Vec<&str> = store.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(store.transactions()[1].amount, dec!(20));

    // The counter continues past the loaded rows.
    let mut store = store;
    let id = store
        .add_transaction(new_tx(TransactionType::Income, dec!(5), date(2025, 3, 4)))
        .id
        .clone();
    assert_eq!(id, "4");
}
