//! LedgerStore port - abstraction for ledger persistence
//!
//! Implementations provide `load`, `save` and `reset`; every higher-level
//! operation is one load-modify-save cycle, so each logical mutation is its
//! own durable write. There is no cross-process locking: concurrent
//! invocations against the same ledger are unsupported.

use std::path::PathBuf;

use serde_json::Value;

use crate::domain::entities::{Ledger, OperationRecord};
use crate::domain::value_objects::StateFlag;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation errors
#[derive(Debug)]
pub enum LedgerError {
    /// Backing file exists but cannot be parsed
    Corrupt { path: PathBuf, message: String },
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Corrupt { path, message } => {
                write!(f, "Corrupt ledger {}: {}", path.display(), message)
            }
            LedgerError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Io(err)
    }
}

/// Durable store for one project's [`Ledger`].
pub trait LedgerStore {
    /// Load the ledger, creating and persisting the canonical empty shape
    /// when nothing is stored yet.
    fn load(&self) -> LedgerResult<Ledger>;

    /// Replace the stored ledger.
    fn save(&self, ledger: &Ledger) -> LedgerResult<()>;

    /// Destroy the stored ledger and recreate the canonical empty shape.
    fn reset(&self) -> LedgerResult<()>;

    /// Full snapshot of the stored ledger.
    fn read_all(&self) -> LedgerResult<Ledger> {
        self.load()
    }

    /// Load, apply `f`, save.
    fn update(&self, f: &mut dyn FnMut(&mut Ledger)) -> LedgerResult<()> {
        let mut ledger = self.load()?;
        f(&mut ledger);
        self.save(&ledger)
    }

    /// Append an operation record stamped with the current time.
    fn log_operation(&self, operation: &str, details: Value) -> LedgerResult<()> {
        let record = OperationRecord::new(operation, details);
        tracing::debug!(operation, "logging operation");
        self.update(&mut |ledger| ledger.append(record.clone()))
    }

    fn get_state(&self, key: &str) -> LedgerResult<Option<Value>> {
        Ok(self.load()?.get_state(key).cloned())
    }

    fn set_state(&self, key: &str, value: Value) -> LedgerResult<()> {
        self.update(&mut |ledger| ledger.set_state(key, value.clone()))
    }

    fn flag(&self, flag: StateFlag) -> LedgerResult<bool> {
        Ok(self.load()?.flag(flag))
    }

    fn set_flag(&self, flag: StateFlag) -> LedgerResult<()> {
        self.set_state(flag.as_str(), Value::Bool(true))
    }

    fn get_config(&self, key: &str) -> LedgerResult<Option<Value>> {
        Ok(self.load()?.get_config(key).cloned())
    }

    /// Config value, or `default` when the key is absent.
    fn get_config_or(&self, key: &str, default: Value) -> LedgerResult<Value> {
        Ok(self.get_config(key)?.unwrap_or(default))
    }

    fn set_config(&self, key: &str, value: Value) -> LedgerResult<()> {
        self.update(&mut |ledger| ledger.set_config(key, value.clone()))
    }
}
