// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::criteria_from_args;
use crate::export::{self, ExportFormat};
use crate::filter::filter;
use crate::models::Transaction;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufWriter;

pub fn handle(transactions: &[Transaction], m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().parse::<ExportFormat>()?;
    let out = m.get_one::<String>("out").unwrap().trim();
    let criteria = criteria_from_args(m)?;

    let selected = filter(transactions, &criteria);
    let file = File::create(out).with_context(|| format!("Create {}", out))?;
    export::write(fmt, &selected, BufWriter::new(file))?;

    info!("exported {} of {} transactions", selected.len(), transactions.len());
    println!("Exported {} transactions to {}", selected.len(), out);
    Ok(())
}
