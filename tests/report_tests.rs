// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::cli;
use cashbook::commands::{charts, summary, transactions};
use cashbook::models::{FinancialSummary, Transaction, TransactionType};
use chrono::{Duration, Local};
use rust_decimal::Decimal;

fn recent(id: &str, ty: TransactionType, amount: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: Local::now().naive_local() - Duration::minutes(1),
        description: "x".into(),
        amount: amount.parse().unwrap(),
        r#type: ty,
        category: None,
    }
}

fn collection() -> Vec<Transaction> {
    vec![
        recent("a", TransactionType::Income, "1500"),
        recent("b", TransactionType::Expense, "250.40"),
    ]
}

fn run_summary(all: &[Transaction], args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["cashbook", "summary"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("summary", m)) = matches.subcommand() {
        summary::handle(all, m)
    } else {
        panic!("no summary subcommand");
    }
}

fn run_chart(all: &[Transaction], args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["cashbook", "chart"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("chart", m)) = matches.subcommand() {
        charts::handle(all, m)
    } else {
        panic!("no chart subcommand");
    }
}

#[test]
fn summary_prints_as_table_and_json() {
    let all = collection();
    run_summary(&all, &[]).unwrap();
    run_summary(&all, &["--json"]).unwrap();
    run_summary(&all, &["--jsonl"]).unwrap();
    run_summary(&[], &["--json"]).unwrap();
}

#[test]
fn summary_rows_keep_dashboard_order() {
    let s = FinancialSummary {
        total_income: Decimal::new(150000, 2),
        total_expense: Decimal::new(25040, 2),
        net_balance: Decimal::new(124960, 2),
        daily_profit: Decimal::new(124960, 2),
        monthly_profit: Decimal::new(124960, 2),
        yearly_profit: Decimal::new(124960, 2),
    };
    let rows = summary::summary_rows(&s);
    let labels: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Saldo Atual",
            "Receita Total",
            "Despesas Totais",
            "Lucro Diário",
            "Lucro Mensal",
            "Lucro Anual",
        ]
    );
    assert_eq!(rows[0][1], "R$ 1.249,60");
    assert_eq!(rows[1][1], "R$ 1.500,00");
    assert_eq!(rows[2][1], "R$ 250,40");
}

#[test]
fn every_chart_kind_renders() {
    let all = collection();
    for kind in ["monthly", "distribution", "daily"] {
        run_chart(&all, &[kind]).unwrap();
        run_chart(&all, &[kind, "--json"]).unwrap();
        run_chart(&[], &[kind, "--jsonl"]).unwrap();
    }
}

#[test]
fn chart_without_kind_is_a_no_op() {
    run_chart(&collection(), &[]).unwrap();
}

#[test]
fn list_footer_counts_shown_and_total() {
    assert_eq!(transactions::list_footer(2, 3), "Mostrando 2 de 3 transações");
    assert_eq!(transactions::list_footer(0, 0), "Mostrando 0 de 0 transações");
}
