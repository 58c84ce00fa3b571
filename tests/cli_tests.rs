// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finanzapp::filter::FilterSpec;
use finanzapp::models::TransactionType;
use finanzapp::store::LedgerStore;
use finanzapp::{
    cli,
    commands::{exporter, transactions},
    utils,
};
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn tx_list_matches(args: &[&str]) -> clap::ArgMatches {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args.iter().copied());
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn month_flag_is_one_based_and_mapped_to_the_zero_based_spec() {
    let list_m = tx_list_matches(&[
        "finanzapp", "tx", "list", "--month", "12", "--year", "2024", "--type", "income",
    ]);
    let spec = utils::filter_spec_from_args(&list_m).unwrap();
    assert_eq!(
        spec,
        FilterSpec {
            month: Some(11),
            year: Some(2024),
            r#type: Some(TransactionType::Income),
        }
    );
}

#[test]
fn month_flag_rejects_out_of_range_values() {
    for bad in ["0", "13"] {
        let cli = cli::build_cli();
        assert!(
            cli.try_get_matches_from(["finanzapp", "tx", "list", "--month", bad])
                .is_err()
        );
    }
}

#[test]
fn unknown_type_token_is_rejected_at_the_parse_boundary() {
    let list_m = tx_list_matches(&["finanzapp", "tx", "list", "--type", "transfer"]);
    assert!(utils::filter_spec_from_args(&list_m).is_err());
}

fn run_tx(store: &mut LedgerStore, args: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args.iter().copied());
    if let Some(("tx", tx_m)) = matches.subcommand() {
        return transactions::handle(store, tx_m);
    }
    panic!("no tx subcommand");
}

#[test]
fn update_applies_the_same_field_guards_as_add() {
    let mut store = LedgerStore::seeded();
    assert!(run_tx(&mut store, &["finanzapp", "tx", "update", "3", "--amount=-500"]).is_err());
    assert!(run_tx(&mut store, &["finanzapp", "tx", "update", "3", "--category", ""]).is_err());
    assert!(run_tx(&mut store, &["finanzapp", "tx", "update", "3", "--description", ""]).is_err());
    // The rejected patches left the record untouched.
    let t = store
        .transactions()
        .iter()
        .find(|t| t.id == "3")
        .cloned()
        .unwrap();
    assert_eq!(t.amount, dec!(12000));
    assert_eq!(t.category, "Renta");
    assert_eq!(t.description, "Renta mensual");
}

#[test]
fn add_rejects_invalid_form_input() {
    let mut store = LedgerStore::seeded();
    let result = run_tx(
        &mut store,
        &[
            "finanzapp",
            "tx",
            "add",
            "--type",
            "expense",
            "--amount=-10",
            "--category",
            "Renta",
            "--description",
            "Renta mensual",
            "--date",
            "2024-12-01",
        ],
    );
    assert!(result.is_err());
    assert_eq!(store.transactions().len(), 22);
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args.iter().copied());
    if let Some(("export", export_m)) = matches.subcommand() {
        return export_m.clone();
    }
    panic!("no export subcommand");
}

#[test]
fn export_writes_the_filtered_csv_view() {
    let store = LedgerStore::seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("transacciones.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "finanzapp",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        &out_str,
        "--month",
        "12",
        "--year",
        "2024",
    ]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.split('\n').collect();
    assert_eq!(lines[0], "Fecha,Tipo,Categoría,Descripción,Monto");
    // The seed ledger holds 8 December 2024 rows.
    assert_eq!(lines.len(), 9);
    assert!(lines[1..].iter().all(|l| l.contains("\"2024-12-")));
}

#[test]
fn export_rejects_unknown_formats() {
    let store = LedgerStore::seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "finanzapp",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    assert!(exporter::handle(&store, &export_m).is_err());
    assert!(!out_path.exists());
}

#[test]
fn export_writes_an_xlsx_workbook() {
    let store = LedgerStore::seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("transacciones.xlsx");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "finanzapp",
        "export",
        "transactions",
        "--format",
        "xlsx",
        "--out",
        &out_str,
    ]);
    exporter::handle(&store, &export_m).unwrap();

    let bytes = std::fs::read(&out_path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn ledger_csv_replaces_the_seed_transactions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    std::fs::write(
        &path,
        "type,amount,category,description,date,account_id\n\
         income,1000,Salario,Pago,2025-02-14,\n\
         expense,250,Transporte,Gasolina,2025-02-15,1\n",
    )
    .unwrap();

    let rows = utils::read_ledger_csv(&path.to_string_lossy()).unwrap();
    let store = LedgerStore::from_rows(rows);
    assert_eq!(store.transactions().len(), 2);
    assert_eq!(store.transactions()[0].amount, dec!(1000));
    assert_eq!(store.transactions()[0].account_id, None);
    assert_eq!(store.transactions()[1].account_id.as_deref(), Some("1"));
    // Accounts and loans stay seeded regardless of the ledger source.
    assert_eq!(store.accounts().len(), 4);
    assert_eq!(store.total_debt(), dec!(2345000));
}

#[test]
fn malformed_ledger_rows_are_reported_with_context() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    std::fs::write(
        &path,
        "type,amount,category,description,date,account_id\n\
         transfer,1000,Salario,Pago,2025-02-14,\n",
    )
    .unwrap();
    assert!(utils::read_ledger_csv(&path.to_string_lossy()).is_err());
}
