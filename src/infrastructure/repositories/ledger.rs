//! JSON Ledger Repository
//!
//! Implements the LedgerStore port on a pretty-printed JSON file. Every save
//! is an atomic replace through [`LocalFs`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::entities::{now_timestamp, Ledger, OperationRecord};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::ledger_store::{LedgerError, LedgerResult, LedgerStore};
use crate::infrastructure::fs::LocalFs;

/// JSON-file ledger store
pub struct JsonLedgerStore {
    path: PathBuf,
    fs: LocalFs,
}

impl JsonLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, message: impl Into<String>) -> LedgerError {
        LedgerError::Corrupt {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn create_canonical(&self) -> LedgerResult<Ledger> {
        let ledger = Ledger::new();
        tracing::debug!(path = %self.path.display(), "initialising ledger");
        self.save(&ledger)?;
        Ok(ledger)
    }
}

/// On-disk record shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonRecord {
    timestamp: String,
    operation: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    details: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// A key that is present deserializes to `Some`, even when it holds `null`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// On-disk ledger shape; unknown top-level keys ride along in `extra`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLedger {
    #[serde(default = "now_timestamp")]
    created_at: String,
    #[serde(default)]
    operations: Vec<JsonRecord>,
    #[serde(default)]
    state: BTreeMap<String, Value>,
    #[serde(default)]
    config: BTreeMap<String, Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl From<JsonLedger> for Ledger {
    fn from(json: JsonLedger) -> Self {
        let operations = json
            .operations
            .into_iter()
            .map(|r| {
                OperationRecord::restored(r.timestamp, r.operation, r.details).with_extra(r.extra)
            })
            .collect();
        Ledger::from_parts(json.created_at, operations, json.state, json.config)
            .with_extra(json.extra)
    }
}

impl From<&Ledger> for JsonLedger {
    fn from(ledger: &Ledger) -> Self {
        JsonLedger {
            created_at: ledger.created_at().to_string(),
            operations: ledger
                .operations()
                .iter()
                .map(|r| JsonRecord {
                    timestamp: r.timestamp().to_string(),
                    operation: r.operation().to_string(),
                    details: r.stored_details().cloned(),
                    extra: r.extra().clone(),
                })
                .collect(),
            state: ledger.state().clone(),
            config: ledger.config().clone(),
            extra: ledger.extra().clone(),
        }
    }
}

fn fs_to_ledger(err: FsError) -> LedgerError {
    match err {
        FsError::Io(e) => LedgerError::Io(e),
        other => LedgerError::Io(std::io::Error::other(other.to_string())),
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self) -> LedgerResult<Ledger> {
        if !self.fs.exists(&self.path) {
            return self.create_canonical();
        }

        let content = self.fs.read(&self.path).map_err(fs_to_ledger)?;
        let json: JsonLedger =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;
        tracing::trace!(
            path = %self.path.display(),
            operations = json.operations.len(),
            "ledger loaded"
        );
        Ok(json.into())
    }

    fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        let json = JsonLedger::from(ledger);
        let content = serde_json::to_string_pretty(&json)
            .map_err(|e| LedgerError::Io(std::io::Error::other(e)))?;
        self.fs.write(&self.path, &content).map_err(fs_to_ledger)?;
        tracing::trace!(path = %self.path.display(), "ledger saved");
        Ok(())
    }

    fn reset(&self) -> LedgerResult<()> {
        if self.fs.exists(&self.path) {
            self.fs.remove_file(&self.path).map_err(fs_to_ledger)?;
        }
        tracing::debug!(path = %self.path.display(), "ledger reset");
        self.create_canonical().map(|_| ())
    }
}
