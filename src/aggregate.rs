// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Summaries and chart series derived from a snapshot of transactions.
//!
//! Everything here is recomputed from scratch on each call. Time-dependent
//! functions take the evaluation instant `now` explicitly; windows start at
//! local midnight and have no upper bound.

use crate::models::{
    DayBucket, FinancialSummary, MonthBucket, Transaction, TransactionType, TypeDistribution,
};
use crate::utils::days_in_month;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windows {
    pub day_start: NaiveDateTime,
    pub month_start: NaiveDateTime,
    pub year_start: NaiveDateTime,
}

impl Windows {
    pub fn anchored_at(now: NaiveDateTime) -> Self {
        let today = now.date();
        let midnight = |d: NaiveDate| d.and_time(NaiveTime::MIN);
        // Day 1 of any month and Jan 1 of any year always exist.
        let first_of_month = today.with_day(1).unwrap_or(today);
        let first_of_year = first_of_month.with_month(1).unwrap_or(first_of_month);
        Self {
            day_start: midnight(today),
            month_start: midnight(first_of_month),
            year_start: midnight(first_of_year),
        }
    }
}

#[derive(Default)]
struct Totals {
    income: Decimal,
    expense: Decimal,
}

impl Totals {
    fn add(&mut self, t: &Transaction) {
        match t.r#type {
            TransactionType::Income => self.income += t.amount,
            TransactionType::Expense => self.expense += t.amount,
        }
    }

    fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

pub fn summarize(transactions: &[Transaction], now: NaiveDateTime) -> FinancialSummary {
    let w = Windows::anchored_at(now);
    let mut all = Totals::default();
    let mut day = Totals::default();
    let mut month = Totals::default();
    let mut year = Totals::default();

    for t in transactions {
        all.add(t);
        if t.date >= w.year_start {
            year.add(t);
        }
        if t.date >= w.month_start {
            month.add(t);
        }
        if t.date >= w.day_start {
            day.add(t);
        }
    }

    FinancialSummary {
        total_income: all.income,
        total_expense: all.expense,
        net_balance: all.net(),
        daily_profit: day.net(),
        monthly_profit: month.net(),
        yearly_profit: year.net(),
    }
}

pub fn summarize_now(transactions: &[Transaction]) -> FinancialSummary {
    summarize(transactions, Local::now().naive_local())
}

/// Income and expense per calendar month of `now`'s year, January first.
pub fn monthly_series(transactions: &[Transaction], now: NaiveDateTime) -> [MonthBucket; 12] {
    let mut months: [MonthBucket; 12] = std::array::from_fn(|i| MonthBucket {
        month: i as u32 + 1,
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
    });

    for t in transactions.iter().filter(|t| t.date.year() == now.year()) {
        let bucket = &mut months[t.date.month0() as usize];
        match t.r#type {
            TransactionType::Income => bucket.income += t.amount,
            TransactionType::Expense => bucket.expense += t.amount,
        }
    }
    months
}

pub fn type_distribution(transactions: &[Transaction]) -> TypeDistribution {
    let mut totals = Totals::default();
    transactions.iter().for_each(|t| totals.add(t));
    TypeDistribution {
        income: totals.income,
        expense: totals.expense,
    }
}

/// Running balance for each day of `now`'s month, built from that month's
/// transactions only.
pub fn daily_balance(transactions: &[Transaction], now: NaiveDateTime) -> Vec<DayBucket> {
    let (year, month) = (now.year(), now.month());
    let mut days: Vec<DayBucket> = (1..=days_in_month(year, month))
        .map(|day| DayBucket {
            day,
            balance: Decimal::ZERO,
        })
        .collect();

    for t in transactions
        .iter()
        .filter(|t| t.date.year() == year && t.date.month() == month)
    {
        days[t.date.day0() as usize].balance += t.signed_amount();
    }

    let mut running = Decimal::ZERO;
    for bucket in days.iter_mut() {
        running += bucket.balance;
        bucket.balance = running;
    }
    days
}
