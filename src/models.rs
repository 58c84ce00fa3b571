// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown {field} '{token}', expected one of: {expected}")]
pub struct UnknownTokenError {
    pub field: &'static str,
    pub token: String,
    pub expected: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Spanish display label, also used as the Tipo column in exports.
    pub fn label_es(&self) -> &'static str {
        match self {
            TransactionType::Income => "Ingreso",
            TransactionType::Expense => "Gasto",
        }
    }
}

impl FromStr for TransactionType {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(UnknownTokenError {
                field: "transaction type",
                token: s.to_string(),
                expected: "income, expense",
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub r#type: TransactionType,
    /// Non-negative magnitude; the sign is implied by `type` and only
    /// materialized by `signed_amount`.
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl Transaction {
    pub fn signed_amount(&self) -> Decimal {
        match self.r#type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Transaction input before the store has assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub account_id: Option<String>,
}

/// Partial update for a stored transaction; `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub r#type: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    /// Can set or replace the account back-reference but not clear it:
    /// a patch has no way to distinguish "leave alone" from "remove".
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Investment,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
            AccountType::Investment => write!(f, "investment"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub r#type: AccountType,
    pub balance: Decimal,
    /// Display hint only, carried for the presentation layer.
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Mortgage,
    Personal,
    Credit,
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanType::Mortgage => write!(f, "mortgage"),
            LoanType::Personal => write!(f, "personal"),
            LoanType::Credit => write!(f, "credit"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub name: String,
    pub r#type: LoanType,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    pub monthly_payment: Decimal,
    /// Annual percentage rate.
    pub interest_rate: Decimal,
}

impl Loan {
    /// Payoff progress in 0..=1, derived rather than stored.
    pub fn progress(&self) -> Decimal {
        if self.total_amount.is_zero() {
            return Decimal::ZERO;
        }
        (self.total_amount - self.remaining_amount) / self.total_amount
    }
}

/// One point of the historical income/expense trend. `profit` is carried
/// as seeded, not recomputed from the other two fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyData {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
}
