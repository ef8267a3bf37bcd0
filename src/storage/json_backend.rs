use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ledger::Ledger;
use crate::utils::app_data_dir;

use super::snapshot::LedgerSnapshot;
use super::Result;

/// Canonical name of the exported snapshot file.
pub const EXPORT_FILE_NAME: &str = "dados_financeiros.json";

const TMP_SUFFIX: &str = "tmp";

/// Serializes the ledger and writes it to `path`, staging through a
/// temporary file so a failed write never leaves a torn snapshot behind.
pub fn export_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = LedgerSnapshot::capture(ledger).to_json_pretty()?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::info!(
        path = %path.display(),
        transactions = ledger.transaction_count(),
        "ledger exported"
    );
    Ok(())
}

/// Reads a snapshot file and rebuilds the ledger it describes.
pub fn import_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let ledger = LedgerSnapshot::from_json_str(&data)?.restore()?;
    tracing::info!(
        path = %path.display(),
        transactions = ledger.transaction_count(),
        "ledger imported"
    );
    Ok(ledger)
}

/// Default location for exported snapshots.
pub fn default_export_path() -> PathBuf {
    app_data_dir().join(EXPORT_FILE_NAME)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
