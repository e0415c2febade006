// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FilterCriteria, Transaction};

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// True when `t` satisfies every constraint present in `criteria`.
pub fn matches(t: &Transaction, criteria: &FilterCriteria) -> bool {
    if let Some(start) = criteria.start_date {
        if t.date < start {
            return false;
        }
    }
    if let Some(end) = criteria.end_date {
        if t.date > end {
            return false;
        }
    }
    if let Some(ty) = criteria.r#type {
        if t.r#type != ty {
            return false;
        }
    }
    if let Some(cat) = non_empty(&criteria.category) {
        if t.category.as_deref() != Some(cat) {
            return false;
        }
    }
    if let Some(term) = non_empty(&criteria.search_term) {
        if !t
            .description
            .to_lowercase()
            .contains(&term.to_lowercase())
        {
            return false;
        }
    }
    true
}

/// Stable-order subsequence of `transactions` matching `criteria`.
pub fn filter<'a>(
    transactions: &'a [Transaction],
    criteria: &FilterCriteria,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| matches(t, criteria))
        .collect()
}
