//! Ledger domain models, aggregation, and query helpers.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod query;
pub mod transaction;

pub use ledger::{AggregateSnapshot, Ledger};
pub use query::{sorted_view, FilterMode, KindFilter, LedgerQuery, SortKey};
pub use transaction::{normalize_tag, parse_entry_date, Transaction, TransactionKind};
