// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{daily_balance, monthly_series, type_distribution};
use crate::models::{Transaction, TransactionType};
use crate::utils::{fmt_currency, maybe_print_json, month_name, pretty_table};
use anyhow::Result;
use chrono::Local;

pub fn handle(transactions: &[Transaction], m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(transactions, sub)?,
        Some(("distribution", sub)) => distribution(transactions, sub)?,
        Some(("daily", sub)) => daily(transactions, sub)?,
        _ => {}
    }
    Ok(())
}

fn monthly(transactions: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let months = monthly_series(transactions, Local::now().naive_local());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &months)? {
        let rows = months
            .iter()
            .map(|b| {
                vec![
                    month_name(b.month).to_string(),
                    fmt_currency(&b.income),
                    fmt_currency(&b.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Mês", "Receita", "Despesa"], rows));
    }
    Ok(())
}

fn distribution(transactions: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let dist = type_distribution(transactions);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dist)? {
        let total = dist.income + dist.expense;
        let share = |v: rust_decimal::Decimal| {
            if total.is_zero() {
                "0%".to_string()
            } else {
                format!("{:.0}%", v / total * rust_decimal::Decimal::ONE_HUNDRED)
            }
        };
        let rows = vec![
            vec![
                TransactionType::Income.label().to_string(),
                fmt_currency(&dist.income),
                share(dist.income),
            ],
            vec![
                TransactionType::Expense.label().to_string(),
                fmt_currency(&dist.expense),
                share(dist.expense),
            ],
        ];
        println!("{}", pretty_table(&["Tipo", "Valor", "%"], rows));
    }
    Ok(())
}

fn daily(transactions: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let days = daily_balance(transactions, Local::now().naive_local());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &days)? {
        let rows = days
            .iter()
            .map(|b| vec![b.day.to_string(), fmt_currency(&b.balance)])
            .collect();
        println!("{}", pretty_table(&["Dia", "Saldo"], rows));
    }
    Ok(())
}
