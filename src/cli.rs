// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, command, Arg, ArgAction, Command};

// `type` is a keyword, so this one is built by hand.
fn type_arg(required: bool) -> Arg {
    Arg::new("type")
        .long("type")
        .value_name("TYPE")
        .help("income or expense")
        .required(required)
}

fn with_filters(cmd: Command) -> Command {
    cmd.arg(arg!(--from <DATE> "Only transactions on or after this date").required(false))
        .arg(arg!(--to <DATE> "Only transactions on or before this date").required(false))
        .arg(type_arg(false))
        .arg(arg!(--category <CATEGORY> "Exact category").required(false))
        .arg(arg!(--search <TEXT> "Case-insensitive text in the description").required(false))
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").action(ArgAction::SetTrue))
        .arg(arg!(--jsonl "Print as JSON lines").action(ArgAction::SetTrue))
}

pub fn build_cli() -> Command {
    command!()
        .name("cashbook")
        .about("Track income and expenses, profits and balances")
        .arg(
            arg!(--db <PATH> "Database file (defaults to the platform data dir)")
                .required(false)
                .global(true),
        )
        .subcommand(Command::new("init").about("Create the database and show where it lives"))
        .subcommand(
            Command::new("tx")
                .about("Record, edit, remove and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            arg!(--date <DATE> "YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")
                                .required(false),
                        )
                        .arg(arg!(--description <TEXT>).required(true))
                        .arg(arg!(--amount <AMOUNT> "Positive amount").required(true))
                        .arg(type_arg(true))
                        .arg(arg!(--category <CATEGORY>).required(false)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace the fields of a transaction")
                        .arg(arg!(--id <ID>).required(true))
                        .arg(arg!(--date <DATE>).required(false))
                        .arg(arg!(--description <TEXT>).required(false))
                        .arg(arg!(--amount <AMOUNT>).required(false))
                        .arg(type_arg(false))
                        .arg(arg!(--category <CATEGORY> "Empty string clears it").required(false)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a transaction")
                        .arg(arg!(--id <ID>).required(true)),
                )
                .subcommand(json_flags(with_filters(
                    Command::new("list").about("List transactions"),
                ))),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Totals, net balance and daily/monthly/yearly profit"),
        ))
        .subcommand(
            Command::new("chart")
                .about("Series behind the dashboard charts")
                .subcommand(json_flags(
                    Command::new("monthly").about("Income and expense per month of this year"),
                ))
                .subcommand(json_flags(
                    Command::new("distribution").about("Total income versus total expense"),
                ))
                .subcommand(json_flags(
                    Command::new("daily").about("Cumulative balance per day of this month"),
                )),
        )
        .subcommand(with_filters(
            Command::new("export")
                .about("Export the filtered transactions")
                .arg(arg!(--format <FORMAT> "csv or json").default_value("csv"))
                .arg(arg!(--out <PATH>).required(true)),
        ))
}
