// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::utils::fmt_date_short;
use anyhow::{anyhow, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;
use std::str::FromStr;

pub const CSV_HEADER: [&str; 4] = ["Data", "Descrição", "Valor", "Tipo"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("Unknown format: {} (use csv|json)", other)),
        }
    }
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// One row per transaction. The description is always quoted, the amount is
/// the plain decimal and the type is its display label.
pub fn write_csv<W: Write>(transactions: &[&Transaction], out: W) -> Result<()> {
    // Quoting is done per field below; only the description needs it.
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for t in transactions {
        wtr.write_record([
            fmt_date_short(&t.date),
            quoted(&t.description),
            t.amount.normalize().to_string(),
            t.r#type.label().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(transactions: &[&Transaction], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, transactions)?;
    out.flush()?;
    Ok(())
}

pub fn write<W: Write>(format: ExportFormat, transactions: &[&Transaction], out: W) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(transactions, out),
        ExportFormat::Json => write_json(transactions, out),
    }
}
