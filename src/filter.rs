// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure view derivation over a transaction slice: filtering, year
//! enumeration and sub-totals. Nothing here mutates or observes state.

use crate::models::{Transaction, TransactionType};
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

/// One optional constraint per dimension; `None` means "all".
/// `month` is 0-indexed (January = 0); values outside 0..=11 are
/// representable and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub r#type: Option<TransactionType>,
}

impl FilterSpec {
    pub const ALL: FilterSpec = FilterSpec {
        month: None,
        year: None,
        r#type: None,
    };
}

/// Income/expense sums and their difference over a transaction subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Stable filter: keeps every transaction matching all specified
/// dimensions, in input order, as a fresh collection.
pub fn filter_transactions(transactions: &[Transaction], spec: &FilterSpec) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| {
            let matches_month = spec.month.is_none_or(|m| t.date.month0() == m);
            let matches_year = spec.year.is_none_or(|y| t.date.year() == y);
            let matches_type = spec.r#type.is_none_or(|k| t.r#type == k);
            matches_month && matches_year && matches_type
        })
        .cloned()
        .collect()
}

/// Distinct years present in the collection, newest first. Used to
/// populate the year filter options.
pub fn available_years(transactions: &[Transaction]) -> Vec<i32> {
    let mut years: Vec<i32> = transactions.iter().map(|t| t.date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Sub-totals of the given subset. Callers pass the filtered view so the
/// numbers always reflect the active filter, not the whole ledger.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Income => income += t.amount,
            TransactionType::Expense => expenses += t.amount,
        }
    }
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}
