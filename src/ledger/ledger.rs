use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::LedgerError;

use super::transaction::{Transaction, TransactionKind};

/// Ordered transaction store with incrementally maintained aggregates.
///
/// Every add folds the transaction's contribution into the running totals,
/// the session counters, and (for expenses) the per-category sums; every
/// remove reverses exactly that contribution. Aggregates are never
/// recomputed from scratch and never settable from outside.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    total_income: Decimal,
    total_expenses: Decimal,
    monthly_gain: Decimal,
    monthly_spend: Decimal,
    category_totals: BTreeMap<String, Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            transactions: Vec::new(),
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            monthly_gain: Decimal::ZERO,
            monthly_spend: Decimal::ZERO,
            category_totals: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a validated transaction and returns its identifier.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.apply(&transaction);
        self.transactions.push(transaction);
        self.touch();
        id
    }

    /// Removes the transaction identified by `id`, reversing its aggregate
    /// contributions symmetrically to [`Ledger::add_transaction`].
    pub fn remove_transaction(&mut self, id: Uuid) -> Result<Transaction, LedgerError> {
        let index = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        let removed = self.transactions.remove(index);
        self.reverse(&removed);
        self.touch();
        Ok(removed)
    }

    fn apply(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => {
                self.total_income += txn.amount;
                self.monthly_gain += txn.amount;
            }
            TransactionKind::Expense => {
                self.total_expenses += txn.amount;
                self.monthly_spend += txn.amount;
                for tag in &txn.tags {
                    *self
                        .category_totals
                        .entry(tag.clone())
                        .or_insert(Decimal::ZERO) += txn.amount;
                }
            }
        }
    }

    fn reverse(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => {
                self.total_income -= txn.amount;
                self.monthly_gain -= txn.amount;
            }
            TransactionKind::Expense => {
                self.total_expenses -= txn.amount;
                self.monthly_spend -= txn.amount;
                for tag in &txn.tags {
                    if let Some(total) = self.category_totals.get_mut(tag) {
                        *total -= txn.amount;
                        if *total <= Decimal::ZERO {
                            self.category_totals.remove(tag);
                        }
                    }
                }
            }
        }
    }

    pub fn balance(&self) -> Decimal {
        self.total_income - self.total_expenses
    }

    /// Point-in-time copy of every derived aggregate.
    pub fn aggregates(&self) -> AggregateSnapshot {
        AggregateSnapshot {
            total_income: self.total_income,
            total_expenses: self.total_expenses,
            monthly_gain: self.monthly_gain,
            monthly_spend: self.monthly_spend,
            category_totals: self.category_totals.clone(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn total_income(&self) -> Decimal {
        self.total_income
    }

    pub fn total_expenses(&self) -> Decimal {
        self.total_expenses
    }

    /// Session-cumulative gain counter; accumulates for the lifetime of the
    /// store instance, with no calendar reset.
    pub fn monthly_gain(&self) -> Decimal {
        self.monthly_gain
    }

    /// Session-cumulative spend counter, same lifecycle as
    /// [`Ledger::monthly_gain`].
    pub fn monthly_spend(&self) -> Decimal {
        self.monthly_spend
    }

    pub fn category_totals(&self) -> &BTreeMap<String, Decimal> {
        &self.category_totals
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Rebuilds a store from previously captured state. Totals are adopted
    /// verbatim; the transaction sequence keeps its order.
    pub(crate) fn from_parts(
        transactions: Vec<Transaction>,
        total_income: Decimal,
        total_expenses: Decimal,
        monthly_gain: Decimal,
        monthly_spend: Decimal,
        category_totals: BTreeMap<String, Decimal>,
    ) -> Self {
        let now = Utc::now();
        Self {
            transactions,
            total_income,
            total_expenses,
            monthly_gain,
            monthly_spend,
            category_totals,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Snapshot of the derived aggregates surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSnapshot {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub monthly_gain: Decimal,
    pub monthly_spend: Decimal,
    pub category_totals: BTreeMap<String, Decimal>,
}
