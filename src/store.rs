// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The ledger store owns the mutable transaction collection plus the
//! read-only accounts, loans and trend history. It assumes a single
//! caller applying mutations one at a time; reads observe the most
//! recently applied write.

use crate::models::{
    Account, Loan, MonthlyData, NewTransaction, Transaction, TransactionPatch, TransactionType,
};
use crate::seed;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Income/expense aggregate for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
}

pub struct LedgerStore {
    transactions: Vec<Transaction>,
    accounts: Vec<Account>,
    loans: Vec<Loan>,
    monthly_history: Vec<MonthlyData>,
    next_id: u64,
}

impl LedgerStore {
    /// Store populated with the built-in sample dataset.
    pub fn seeded() -> Self {
        Self::build(seed::transactions())
    }

    /// Store populated from externally supplied rows (e.g. a ledger CSV).
    /// Ids are assigned in row order; the given order is preserved.
    pub fn from_rows(rows: Vec<NewTransaction>) -> Self {
        let transactions = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| Transaction {
                id: (i + 1).to_string(),
                r#type: row.r#type,
                amount: row.amount,
                category: row.category,
                description: row.description,
                date: row.date,
                account_id: row.account_id,
            })
            .collect();
        Self::build(transactions)
    }

    fn build(transactions: Vec<Transaction>) -> Self {
        // Fresh ids continue past the highest numeric id already present.
        let next_id = transactions
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            transactions,
            accounts: seed::accounts(),
            loans: seed::loans(),
            monthly_history: seed::monthly_history(),
            next_id,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn monthly_history(&self) -> &[MonthlyData] {
        &self.monthly_history
    }

    /// Assigns a fresh unique id and inserts at the head of the ledger
    /// (most-recent-first is store policy, not a display concern).
    pub fn add_transaction(&mut self, new: NewTransaction) -> &Transaction {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.transactions.insert(
            0,
            Transaction {
                id,
                r#type: new.r#type,
                amount: new.amount,
                category: new.category,
                description: new.description,
                date: new.date,
                account_id: new.account_id,
            },
        );
        &self.transactions[0]
    }

    /// Merges the patch into the matching record. An unknown id is a
    /// tolerated no-op; the return value reports whether it was found.
    pub fn update_transaction(&mut self, id: &str, patch: TransactionPatch) -> bool {
        let Some(t) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if let Some(kind) = patch.r#type {
            t.r#type = kind;
        }
        if let Some(amount) = patch.amount {
            t.amount = amount;
        }
        if let Some(category) = patch.category {
            t.category = category;
        }
        if let Some(description) = patch.description {
            t.description = description;
        }
        if let Some(date) = patch.date {
            t.date = date;
        }
        if let Some(account_id) = patch.account_id {
            t.account_id = Some(account_id);
        }
        true
    }

    /// Hard removal; unknown ids are a tolerated no-op.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    pub fn total_balance(&self) -> Decimal {
        self.accounts
            .iter()
            .fold(Decimal::ZERO, |sum, a| sum + a.balance)
    }

    pub fn total_debt(&self) -> Decimal {
        self.loans
            .iter()
            .fold(Decimal::ZERO, |sum, l| sum + l.remaining_amount)
    }

    /// Aggregate over the calendar month and year of `today`. The caller
    /// supplies the date so the result is deterministic under test.
    pub fn month_summary(&self, today: NaiveDate) -> MonthSummary {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for t in &self.transactions {
            if t.date.month0() == today.month0() && t.date.year() == today.year() {
                match t.r#type {
                    TransactionType::Income => income += t.amount,
                    TransactionType::Expense => expenses += t.amount,
                }
            }
        }
        MonthSummary {
            income,
            expenses,
            profit: income - expenses,
        }
    }
}
