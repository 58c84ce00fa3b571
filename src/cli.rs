// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

// Shared by `tx list` and `export transactions`. Months are 1-based on
// the command line.
fn filter_args() -> [Arg; 3] {
    [
        Arg::new("month")
            .long("month")
            .value_name("1-12")
            .value_parser(value_parser!(u32).range(1..=12))
            .help("Restrict to a calendar month"),
        Arg::new("year")
            .long("year")
            .value_name("YYYY")
            .value_parser(value_parser!(i32))
            .help("Restrict to a calendar year"),
        Arg::new("type")
            .long("type")
            .value_name("income|expense")
            .help("Restrict to one transaction type"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("finanzapp")
        .about("Personal finance dashboard: in-memory ledger, filtered views, CSV/XLSX export")
        .version(clap::crate_version!())
        .arg(
            Arg::new("ledger")
                .long("ledger")
                .global(true)
                .value_name("CSV")
                .help("Load transactions from a CSV file instead of the built-in sample data"),
        )
        .subcommand(
            Command::new("summary")
                .about("Dashboard stats: balance, debt and the current month")
                .arg(
                    Arg::new("today")
                        .long("today")
                        .value_name("YYYY-MM-DD")
                        .help("Evaluate the month aggregate as of this date"),
                )
                .args(json_flags()),
        )
        .subcommand(
            Command::new("account")
                .about("Seeded accounts")
                .subcommand(Command::new("list").about("List accounts").args(json_flags())),
        )
        .subcommand(
            Command::new("loan")
                .about("Seeded loans")
                .subcommand(Command::new("list").about("List loans").args(json_flags())),
        )
        .subcommand(
            Command::new("tx")
                .about("Transaction ledger")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("income|expense")
                                .required(true),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .required(true),
                        )
                        .arg(Arg::new("account").long("account").value_name("ACCOUNT_ID")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Patch fields of a transaction")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("type").long("type").value_name("income|expense"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("account").long("account").value_name("ACCOUNT_ID")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Remove a transaction")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("list")
                        .about("List the (optionally filtered) ledger with totals")
                        .args(filter_args())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most N rows"),
                        )
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived reports")
                .subcommand(
                    Command::new("trend")
                        .about("Monthly income/expense history")
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("years")
                        .about("Years present in the ledger")
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("Suggested category labels")
                .arg(Arg::new("type").long("type").value_name("income|expense")),
        )
        .subcommand(
            Command::new("export")
                .about("Write a filtered view to a file")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions as csv or xlsx")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_name("csv|xlsx")
                                .required(true),
                        )
                        .arg(Arg::new("out").long("out").value_name("PATH").required(true))
                        .args(filter_args()),
                ),
        )
}
