use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::round_money;
use crate::errors::LedgerError;
use crate::ledger::{normalize_tag, Ledger, Transaction, TransactionKind};

use super::Result;

/// Portable, order-preserving representation of an entire ledger.
///
/// Serializes with camelCase keys; the aliases accept snapshots written with
/// the Portuguese key set so older export files keep importing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    #[serde(alias = "totalRenda")]
    pub total_income: Decimal,
    #[serde(alias = "totalGastos")]
    pub total_expenses: Decimal,
    #[serde(alias = "totalGanhoMes")]
    pub monthly_gain: Decimal,
    #[serde(alias = "totalGastoMes")]
    pub monthly_spend: Decimal,
    #[serde(alias = "categorias")]
    pub categories: BTreeMap<String, Decimal>,
    #[serde(alias = "transacoes")]
    pub transactions: Vec<TransactionRecord>,
}

/// One serialized transaction row. Identifiers are not part of the wire
/// contract; restore assigns fresh ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    #[serde(alias = "tipo")]
    pub kind: TransactionKind,
    #[serde(alias = "valor")]
    pub amount: Decimal,
    #[serde(alias = "data")]
    pub date: NaiveDate,
    #[serde(alias = "descricao")]
    pub description: String,
    pub tags: Vec<String>,
}

impl LedgerSnapshot {
    /// Captures every running total, the category map, and the ordered
    /// transaction sequence.
    pub fn capture(ledger: &Ledger) -> Self {
        Self {
            total_income: ledger.total_income(),
            total_expenses: ledger.total_expenses(),
            monthly_gain: ledger.monthly_gain(),
            monthly_spend: ledger.monthly_spend(),
            categories: ledger.category_totals().clone(),
            transactions: ledger
                .transactions()
                .iter()
                .map(TransactionRecord::from)
                .collect(),
        }
    }

    /// Rebuilds a complete store from this snapshot.
    ///
    /// Totals are adopted verbatim (rounded to currency precision). Every
    /// record passes through the normal transaction constructor; the first
    /// failure aborts the whole restore, so a caller swapping stores can
    /// never end up with a half-imported ledger.
    pub fn restore(self) -> Result<Ledger> {
        let mut transactions = Vec::with_capacity(self.transactions.len());
        for record in self.transactions {
            let txn = Transaction::new(
                record.kind,
                record.amount,
                record.date,
                &record.description,
                record.tags.iter().map(String::as_str),
            )
            .map_err(|err| LedgerError::Format(err.to_string()))?;
            transactions.push(txn);
        }
        Ok(Ledger::from_parts(
            transactions,
            round_money(self.total_income),
            round_money(self.total_expenses),
            round_money(self.monthly_gain),
            round_money(self.monthly_spend),
            restore_categories(self.categories),
        ))
    }

    /// Pretty-printed JSON document, the crate's export format.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            kind: txn.kind,
            amount: txn.amount,
            date: txn.date,
            description: txn.description.clone(),
            tags: txn.tags.clone(),
        }
    }
}

// Category keys are re-normalized so foreign snapshots land in the same key
// space the store maintains; only positive balances are kept.
fn restore_categories(raw: BTreeMap<String, Decimal>) -> BTreeMap<String, Decimal> {
    let mut categories = BTreeMap::new();
    for (tag, total) in raw {
        let tag = normalize_tag(&tag);
        let total = round_money(total);
        if tag.is_empty() || total <= Decimal::ZERO {
            continue;
        }
        *categories.entry(tag).or_insert(Decimal::ZERO) += total;
    }
    categories
}
