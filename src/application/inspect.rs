//! Read-only ledger queries and the `config` key/value commands

use serde_json::Value;

use crate::domain::entities::{Ledger, OperationRecord};
use crate::domain::ports::LedgerStore;
use crate::domain::value_objects::StateFlag;
use crate::error::{ManagerError, ManagerResult};

/// Operations shown by `status --verbose`
pub const STATUS_RECENT_OPERATIONS: usize = 10;

/// Snapshot rendered by `status`
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub project_name: String,
    /// Known flags in lifecycle order, then any other state keys
    pub state: Vec<(String, Value)>,
    pub config: Vec<(String, Value)>,
    pub total_operations: usize,
    /// Last few operations; empty unless verbose
    pub recent: Vec<OperationRecord>,
}

impl StatusSnapshot {
    pub fn from_ledger(ledger: &Ledger, project_name: &str, verbose: bool) -> Self {
        let mut state: Vec<(String, Value)> = StateFlag::ALL
            .iter()
            .map(|flag| {
                let value = ledger
                    .get_state(flag.as_str())
                    .cloned()
                    .unwrap_or(Value::Bool(false));
                (flag.as_str().to_string(), value)
            })
            .collect();
        state.extend(
            ledger
                .state()
                .iter()
                .filter(|(key, _)| !StateFlag::ALL.iter().any(|f| f.as_str() == key.as_str()))
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        let recent = if verbose {
            ledger
                .recent_operations(Some(STATUS_RECENT_OPERATIONS))
                .to_vec()
        } else {
            Vec::new()
        };

        Self {
            project_name: project_name.to_string(),
            state,
            config: ledger
                .config()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            total_operations: ledger.operations().len(),
            recent,
        }
    }
}

pub fn status(
    ledger: &dyn LedgerStore,
    project_name: &str,
    verbose: bool,
) -> ManagerResult<StatusSnapshot> {
    let ledger = ledger.read_all()?;
    Ok(StatusSnapshot::from_ledger(&ledger, project_name, verbose))
}

/// The last `limit` operations (all when `None` or 0), oldest first.
pub fn history(ledger: &dyn LedgerStore, limit: Option<usize>) -> ManagerResult<Vec<OperationRecord>> {
    let ledger = ledger.read_all()?;
    Ok(ledger.recent_operations(limit).to_vec())
}

/// Split `key=value` on the first `=` and trim both halves.
pub fn parse_assignment(raw: &str) -> ManagerResult<(String, String)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        ManagerError::InvalidArgument(format!("expected KEY=VALUE, got '{}'", raw))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ManagerError::InvalidArgument(format!(
            "missing key in '{}'",
            raw
        )));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Store `key=value` as a string config entry and return the parsed pair.
pub fn set_config(ledger: &dyn LedgerStore, raw: &str) -> ManagerResult<(String, String)> {
    let (key, value) = parse_assignment(raw)?;
    tracing::debug!(%key, "setting config");
    ledger.set_config(&key, Value::String(value.clone()))?;
    Ok((key, value))
}

/// Config value for `key`; `None` means not found, never an empty string.
pub fn get_config(ledger: &dyn LedgerStore, key: &str) -> ManagerResult<Option<Value>> {
    Ok(ledger.get_config(key)?)
}

/// Strings print raw, everything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
