//! Domain Entities
//!
//! - `Ledger` - lifecycle flags, key/value config and operation history
//! - `OperationRecord` - one immutable history entry

mod ledger;

pub use ledger::{now_timestamp, Ledger, OperationRecord};
