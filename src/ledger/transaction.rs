use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::round_money;
use crate::errors::LedgerError;

/// Whether an entry adds to or draws from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[serde(alias = "Income", alias = "Renda")]
    Income,
    #[serde(alias = "Expense", alias = "Gasto")]
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dated ledger entry with a stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub tags: Vec<String>,
}

impl Transaction {
    /// Validates and normalizes raw entry fields into a transaction with a
    /// fresh identifier.
    ///
    /// The amount is rounded to currency precision and must be strictly
    /// positive; the description must contain non-whitespace text. Tags are
    /// trimmed, lowercased, and deduplicated, preserving first-seen order.
    pub fn new<I, S>(
        kind: TransactionKind,
        amount: Decimal,
        date: NaiveDate,
        description: &str,
        tags: I,
    ) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let amount = round_money(amount);
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(
                "amount must be a positive value".into(),
            ));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::Validation(
                "description must not be empty".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            description: description.to_string(),
            tags: normalize_tags(tags),
        })
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Canonical form of a single tag label: trimmed and lowercased.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalizes a label list, dropping empties and duplicates while keeping
/// first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = normalize_tag(tag.as_ref());
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        normalized.push(tag);
    }
    normalized
}

/// Parses a calendar date in ISO `%Y-%m-%d` form.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| LedgerError::Validation(format!("date `{trimmed}` is not a calendar date")))
}
