// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input boundary: raw user input becomes a [`NewTransaction`] here or is
//! rejected. The store trusts whatever reaches it.

use crate::models::{NewTransaction, TransactionType};
use crate::utils::parse_datetime;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("date is required")]
    MissingDate,
    #[error("invalid date '{0}', expected YYYY-MM-DD[THH:MM[:SS]]")]
    InvalidDate(String),
    #[error("invalid type '{0}', expected income or expense")]
    InvalidType(String),
}

/// Raw, unchecked fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub date: Option<String>,
    pub description: String,
    pub amount: String,
    pub r#type: String,
    pub category: Option<String>,
}

impl TransactionForm {
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let date_raw = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingDate)?;
        let date = parse_datetime(date_raw)
            .map_err(|_| ValidationError::InvalidDate(date_raw.to_string()))?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount = parse_amount(&self.amount)?;
        let r#type = self
            .r#type
            .parse::<TransactionType>()
            .map_err(ValidationError::InvalidType)?;

        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(NewTransaction {
            date,
            description: description.to_string(),
            amount,
            r#type,
            category,
        })
    }
}

pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::InvalidAmount(String::new()));
    }
    let amount = raw
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(amount)
}
