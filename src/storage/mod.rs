//! Snapshot serialization and file-backed import/export.

pub mod json_backend;
pub mod snapshot;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

pub use json_backend::{default_export_path, export_to_path, import_from_path, EXPORT_FILE_NAME};
pub use snapshot::{LedgerSnapshot, TransactionRecord};
