// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::summarize_now;
use crate::models::{FinancialSummary, Transaction};
use crate::utils::{fmt_currency, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(transactions: &[Transaction], m: &clap::ArgMatches) -> Result<()> {
    let summary = summarize_now(transactions);
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        println!("{}", pretty_table(&["", "Valor"], summary_rows(&summary)));
    }
    Ok(())
}

pub fn summary_rows(s: &FinancialSummary) -> Vec<Vec<String>> {
    [
        ("Saldo Atual", s.net_balance),
        ("Receita Total", s.total_income),
        ("Despesas Totais", s.total_expense),
        ("Lucro Diário", s.daily_profit),
        ("Lucro Mensal", s.monthly_profit),
        ("Lucro Anual", s.yearly_profit),
    ]
    .into_iter()
    .map(|(label, v)| vec![label.to_string(), fmt_currency(&v)])
    .collect()
}
