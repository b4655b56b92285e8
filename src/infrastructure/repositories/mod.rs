//! Repository Implementations

mod ledger;

pub use ledger::JsonLedgerStore;
