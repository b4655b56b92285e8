//! Ledger entity - durable lifecycle record for one project
//!
//! Holds the state flags, free-form config and the append-only operation
//! history. It's a pure data structure - persistence is handled by a
//! `LedgerStore`.

use std::collections::BTreeMap;

use chrono::{Local, SecondsFormat};
use serde_json::{Map, Value};

use crate::domain::value_objects::StateFlag;

/// Current local time as an ISO-8601 string with microseconds and offset.
pub fn now_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

static NO_DETAILS: Value = Value::Null;

/// One immutable history entry.
///
/// Records read back from disk keep their `details` and any extra keys
/// exactly as stored, whatever their JSON type.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    timestamp: String,
    operation: String,
    /// `None` when a stored record has no `details` key
    details: Option<Value>,
    extra: BTreeMap<String, Value>,
}

impl OperationRecord {
    /// Create a record stamped with the current time. `null` details are
    /// recorded as an empty object.
    pub fn new(operation: impl Into<String>, details: Value) -> Self {
        let details = match details {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        Self::with_timestamp(now_timestamp(), operation, details)
    }

    pub fn with_timestamp(
        timestamp: impl Into<String>,
        operation: impl Into<String>,
        details: Value,
    ) -> Self {
        Self::restored(timestamp, operation, Some(details))
    }

    /// Rebuild a stored record without touching its details.
    pub fn restored(
        timestamp: impl Into<String>,
        operation: impl Into<String>,
        details: Option<Value>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            operation: operation.into(),
            details,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, extra: BTreeMap<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Details as stored; `null` when the record has none.
    pub fn details(&self) -> &Value {
        self.details.as_ref().unwrap_or(&NO_DETAILS)
    }

    /// Details exactly as stored, including an absent key.
    pub fn stored_details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Anything worth printing: not absent, `null` or `{}`.
    pub fn has_details(&self) -> bool {
        match self.details() {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }

    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }
}

/// Lifecycle ledger for one project instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    created_at: String,
    operations: Vec<OperationRecord>,
    state: BTreeMap<String, Value>,
    config: BTreeMap<String, Value>,
    /// Top-level keys this version does not know about, kept verbatim.
    extra: BTreeMap<String, Value>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Canonical empty shape: no operations, every known flag false, no config.
    pub fn new() -> Self {
        let state = StateFlag::ALL
            .iter()
            .map(|flag| (flag.as_str().to_string(), Value::Bool(false)))
            .collect();

        Self {
            created_at: now_timestamp(),
            operations: Vec::new(),
            state,
            config: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn from_parts(
        created_at: impl Into<String>,
        operations: Vec<OperationRecord>,
        state: BTreeMap<String, Value>,
        config: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            created_at: created_at.into(),
            operations,
            state,
            config,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, extra: BTreeMap<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn operations(&self) -> &[OperationRecord] {
        &self.operations
    }

    /// The last `limit` operations in logging order (all when `None` or 0).
    pub fn recent_operations(&self, limit: Option<usize>) -> &[OperationRecord] {
        match limit {
            Some(n) if n > 0 && n < self.operations.len() => {
                &self.operations[self.operations.len() - n..]
            }
            _ => &self.operations,
        }
    }

    pub fn state(&self) -> &BTreeMap<String, Value> {
        &self.state
    }

    pub fn config(&self) -> &BTreeMap<String, Value> {
        &self.config
    }

    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Append a record. The only write the history ever sees.
    pub fn append(&mut self, record: OperationRecord) {
        self.operations.push(record);
    }

    pub fn get_state(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    pub fn set_state(&mut self, key: impl Into<String>, value: Value) {
        self.state.insert(key.into(), value);
    }

    /// Whether a known flag is set. Absent keys read as false.
    pub fn flag(&self, flag: StateFlag) -> bool {
        self.state.get(flag.as_str()).is_some_and(is_truthy)
    }

    pub fn get_config(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    pub fn set_config(&mut self, key: impl Into<String>, value: Value) {
        self.config.insert(key.into(), value);
    }

    /// Config value as a string, if present and a string.
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(Value::as_str)
    }

    /// True when the ledger matches the canonical empty shape
    /// (`created_at` is not compared).
    pub fn is_canonical_empty(&self) -> bool {
        let fresh = Ledger::new();
        self.operations.is_empty()
            && self.config.is_empty()
            && self.state == fresh.state
            && self.extra.is_empty()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
