// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use env_logger::Env;
use std::path::PathBuf;

use cashbook::notify::ConsoleNotifier;
use cashbook::storage::SqliteStorage;
use cashbook::store::TransactionStore;
use cashbook::{cli, commands, db};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p.trim()),
        None => db::db_path()?,
    };
    let conn = db::open_at(&path)?;
    let mut store = TransactionStore::open(SqliteStorage::new(conn), ConsoleNotifier);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(store.snapshot(), sub)?,
        Some(("chart", sub)) => commands::charts::handle(store.snapshot(), sub)?,
        Some(("export", sub)) => commands::exporter::handle(store.snapshot(), sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
