//! Business logic helpers for recording and deleting ledger entries.

use uuid::Uuid;

use crate::currency::parse_amount;
use crate::errors::LedgerError;
use crate::ledger::{parse_entry_date, Ledger, Transaction, TransactionKind};

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Records an entry from raw form fields and returns its identifier.
    ///
    /// `amount` and `date` arrive as text; `tags` is a comma-separated label
    /// list in which empty segments are dropped. Nothing is written to the
    /// store unless every field validates.
    pub fn add_entry(
        ledger: &mut Ledger,
        kind: TransactionKind,
        amount: &str,
        date: &str,
        description: &str,
        tags: &str,
    ) -> ServiceResult<Uuid> {
        let amount = parse_amount(amount).map_err(invalid)?;
        let date = parse_entry_date(date).map_err(invalid)?;
        let transaction =
            Transaction::new(kind, amount, date, description, tags.split(',')).map_err(invalid)?;
        Ok(ledger.add_transaction(transaction))
    }

    /// Adds an already validated transaction.
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<Uuid> {
        Ok(ledger.add_transaction(transaction))
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger.remove_transaction(id).map_err(ServiceError::from)
    }

    /// Returns the stored transactions in entry order.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions().iter().collect()
    }
}

fn invalid(err: LedgerError) -> ServiceError {
    ServiceError::Invalid(err.to_string())
}
