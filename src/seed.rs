// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Illustrative sample data: every number here is fake. Accounts, loans and
//! the trend history are load-time constants with no mutation API.

use crate::models::{
    Account, AccountType, Loan, LoanType, MonthlyData, Transaction, TransactionType,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use TransactionType::{Expense, Income};

/// Suggested category labels per transaction type. Guidance for entry
/// forms only; stored categories are free text and never validated
/// against this map.
static SUGGESTED_CATEGORIES: Lazy<HashMap<TransactionType, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            Income,
            vec!["Salario", "Freelance", "Inversiones", "Ventas", "Otros"],
        ),
        (
            Expense,
            vec![
                "Renta",
                "Servicios",
                "Supermercado",
                "Transporte",
                "Entretenimiento",
                "Salud",
                "Educación",
                "Otros",
            ],
        ),
    ])
});

pub fn suggested_categories(kind: TransactionType) -> &'static [&'static str] {
    SUGGESTED_CATEGORIES
        .get(&kind)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

fn tx(
    id: &str,
    kind: TransactionType,
    amount: Decimal,
    category: &str,
    description: &str,
    (y, m, d): (i32, u32, u32),
) -> Transaction {
    Transaction {
        id: id.to_string(),
        r#type: kind,
        amount,
        category: category.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        account_id: None,
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        // Diciembre 2024
        tx("1", Income, dec!(45000), "Salario", "Pago quincenal", (2024, 12, 15)),
        tx("2", Income, dec!(45000), "Salario", "Pago quincenal", (2024, 12, 31)),
        tx("3", Expense, dec!(12000), "Renta", "Renta mensual", (2024, 12, 1)),
        tx("4", Expense, dec!(3500), "Servicios", "Luz, agua, gas", (2024, 12, 5)),
        tx("5", Expense, dec!(8000), "Supermercado", "Despensa mensual", (2024, 12, 10)),
        tx("6", Expense, dec!(2500), "Transporte", "Gasolina", (2024, 12, 12)),
        tx("7", Income, dec!(30000), "Freelance", "Aguinaldo proyecto", (2024, 12, 20)),
        tx("8", Expense, dec!(15000), "Entretenimiento", "Regalos navidad", (2024, 12, 22)),
        // Noviembre 2024
        tx("9", Income, dec!(45000), "Salario", "Pago quincenal", (2024, 11, 15)),
        tx("10", Income, dec!(45000), "Salario", "Pago quincenal", (2024, 11, 30)),
        tx("11", Expense, dec!(12000), "Renta", "Renta mensual", (2024, 11, 1)),
        tx("12", Expense, dec!(4200), "Servicios", "Luz, agua, gas", (2024, 11, 5)),
        tx("13", Expense, dec!(9500), "Supermercado", "Despensa mensual", (2024, 11, 8)),
        tx("14", Income, dec!(5000), "Freelance", "Diseño logo", (2024, 11, 18)),
        tx("15", Expense, dec!(3000), "Salud", "Consulta médica", (2024, 11, 25)),
        // Octubre 2024
        tx("16", Income, dec!(45000), "Salario", "Pago quincenal", (2024, 10, 15)),
        tx("17", Income, dec!(45000), "Salario", "Pago quincenal", (2024, 10, 31)),
        tx("18", Expense, dec!(12000), "Renta", "Renta mensual", (2024, 10, 1)),
        tx("19", Expense, dec!(3800), "Servicios", "Luz, agua, gas", (2024, 10, 5)),
        tx("20", Expense, dec!(7500), "Supermercado", "Despensa mensual", (2024, 10, 10)),
        tx("21", Expense, dec!(2800), "Transporte", "Gasolina", (2024, 10, 14)),
        tx("22", Expense, dec!(1500), "Entretenimiento", "Netflix, Spotify", (2024, 10, 8)),
    ]
}

pub fn accounts() -> Vec<Account> {
    let acc = |id: &str, name: &str, kind: AccountType, balance: Decimal, color: &str| Account {
        id: id.to_string(),
        name: name.to_string(),
        r#type: kind,
        balance,
        color: color.to_string(),
    };
    vec![
        acc("1", "Cuenta Nómina", AccountType::Checking, dec!(28500), "hsl(217 91% 60%)"),
        acc("2", "Ahorro Emergencia", AccountType::Savings, dec!(85000), "hsl(160 84% 39%)"),
        acc("3", "Inversiones", AccountType::Investment, dec!(150000), "hsl(280 70% 50%)"),
        acc("4", "Ahorro Vacaciones", AccountType::Savings, dec!(25000), "hsl(38 92% 50%)"),
    ]
}

pub fn loans() -> Vec<Loan> {
    let loan = |id: &str,
                name: &str,
                kind: LoanType,
                total: Decimal,
                remaining: Decimal,
                payment: Decimal,
                rate: Decimal| Loan {
        id: id.to_string(),
        name: name.to_string(),
        r#type: kind,
        total_amount: total,
        remaining_amount: remaining,
        monthly_payment: payment,
        interest_rate: rate,
    };
    vec![
        loan("1", "Hipoteca", LoanType::Mortgage, dec!(2500000), dec!(2150000), dec!(18500), dec!(9.5)),
        loan("2", "Préstamo Auto", LoanType::Personal, dec!(350000), dec!(180000), dec!(8500), dec!(12.0)),
        loan("3", "Tarjeta de Crédito", LoanType::Credit, dec!(50000), dec!(15000), dec!(3000), dec!(35.0)),
    ]
}

pub fn monthly_history() -> Vec<MonthlyData> {
    let point = |month: &str, income: Decimal, expenses: Decimal, profit: Decimal| MonthlyData {
        month: month.to_string(),
        income,
        expenses,
        profit,
    };
    vec![
        point("Ago", dec!(85000), dec!(52000), dec!(33000)),
        point("Sep", dec!(92000), dec!(58000), dec!(34000)),
        point("Oct", dec!(88000), dec!(45000), dec!(43000)),
        point("Nov", dec!(95000), dec!(62000), dec!(33000)),
        point("Dic", dec!(120000), dec!(85000), dec!(35000)),
        point("Ene", dec!(95000), dec!(27500), dec!(67500)),
    ]
}
