//! Durable name-to-balance store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Persisted chip balances, keyed by player display name.
///
/// The only durable state in the game. The file is a flat JSON object; a
/// missing or malformed file loads as an empty ledger, and saving rewrites
/// the whole file through a temp-and-rename so a crash mid-write never
/// leaves a torn ledger behind.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// File the ledger reads from and writes to.
    path: PathBuf,
    /// Recorded balances.
    balances: BTreeMap<String, f64>,
}

impl Ledger {
    /// Opens the ledger at `path`.
    ///
    /// A missing or unreadable file is an empty ledger, not an error.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let balances = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();

        Self { path, balances }
    }

    /// Returns the saved balance for `name`, if any.
    #[must_use]
    pub fn balance(&self, name: &str) -> Option<f64> {
        self.balances.get(name).copied()
    }

    /// Records `name`'s balance for the next save.
    pub fn record(&mut self, name: &str, chips: f64) {
        self.balances.insert(name.to_owned(), chips);
    }

    /// Writes the recorded balances back to disk, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the file write fails.
    pub fn save(&self) -> Result<(), LedgerError> {
        let text = serde_json::to_string(&self.balances)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }

    /// Returns the path this ledger reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
