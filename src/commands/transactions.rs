// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::filter;
use crate::models::{FilterCriteria, Transaction, TransactionId, TransactionType};
use crate::notify::Notifier;
use crate::storage::Storage;
use crate::store::TransactionStore;
use crate::utils::{
    fmt_currency, fmt_date_short, maybe_print_json, parse_datetime, parse_end_bound, pretty_table,
};
use crate::validation::{TransactionForm, ValidationError};
use anyhow::{Context, Result};
use chrono::Local;

pub fn handle<S: Storage, N: Notifier>(
    store: &mut TransactionStore<S, N>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(store, sub)?;
        }
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("list", sub)) => list(store.snapshot(), sub)?,
        _ => {}
    }
    Ok(())
}

fn opt_arg(sub: &clap::ArgMatches, name: &str) -> Option<String> {
    sub.get_one::<String>(name).map(|s| s.to_string())
}

pub fn add<S: Storage, N: Notifier>(
    store: &mut TransactionStore<S, N>,
    sub: &clap::ArgMatches,
) -> Result<TransactionId> {
    let form = TransactionForm {
        date: Some(
            opt_arg(sub, "date")
                .unwrap_or_else(|| Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()),
        ),
        description: opt_arg(sub, "description").unwrap_or_default(),
        amount: opt_arg(sub, "amount").unwrap_or_default(),
        r#type: opt_arg(sub, "type").unwrap_or_default(),
        category: opt_arg(sub, "category"),
    };
    let new = form.validate().context("Transaction rejected")?;
    let id = store.add(new);
    println!("id: {}", id);
    Ok(id)
}

fn edit<S: Storage, N: Notifier>(
    store: &mut TransactionStore<S, N>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let current = store
        .get(&id)
        .with_context(|| format!("Transaction '{}' not found", id))?;

    // Unspecified fields keep their current value; the result replaces the whole record.
    let new_date = opt_arg(sub, "date");
    let current_date = current.date;
    let form = TransactionForm {
        date: Some(new_date.clone().unwrap_or_else(|| {
            current.date.format("%Y-%m-%dT%H:%M:%S").to_string()
        })),
        description: opt_arg(sub, "description").unwrap_or_else(|| current.description.clone()),
        amount: opt_arg(sub, "amount").unwrap_or_else(|| current.amount.to_string()),
        r#type: opt_arg(sub, "type").unwrap_or_else(|| current.r#type.to_string()),
        category: opt_arg(sub, "category").or_else(|| current.category.clone()),
    };
    let mut replacement = form.validate().context("Transaction rejected")?;
    if new_date.is_none() {
        replacement.date = current_date;
    }
    store.update(replacement.with_id(id));
    Ok(())
}

fn rm<S: Storage, N: Notifier>(
    store: &mut TransactionStore<S, N>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    if !store.delete(id) {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn list(transactions: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(transactions, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    fmt_date_short(&r.date),
                    r.description.clone(),
                    format!("{} {}", sign_of(r.r#type), fmt_currency(&r.amount)),
                    r.r#type.label().to_string(),
                    r.category.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Data", "Descrição", "Valor", "Tipo", "Categoria"], rows)
        );
        println!("{}", list_footer(data.len(), transactions.len()));
    }
    Ok(())
}

pub fn list_footer(shown: usize, total: usize) -> String {
    format!("Mostrando {} de {} transações", shown, total)
}

fn sign_of(t: TransactionType) -> char {
    match t {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    }
}

pub fn query_rows(
    transactions: &[Transaction],
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let criteria = criteria_from_args(sub)?;
    Ok(filter(transactions, &criteria).into_iter().cloned().collect())
}

/// Builds filter criteria from the shared `--from/--to/--type/--category/--search` args.
pub fn criteria_from_args(sub: &clap::ArgMatches) -> Result<FilterCriteria> {
    let start_date = sub
        .get_one::<String>("from")
        .map(|s| parse_datetime(s))
        .transpose()?;
    let end_date = sub
        .get_one::<String>("to")
        .map(|s| parse_end_bound(s))
        .transpose()?;
    let r#type = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>().map_err(ValidationError::InvalidType))
        .transpose()?;
    Ok(FilterCriteria {
        start_date,
        end_date,
        r#type,
        category: opt_arg(sub, "category").map(|s| s.trim().to_string()),
        search_term: opt_arg(sub, "search"),
    })
}
