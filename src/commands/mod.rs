//! Command handlers, one per subcommand
//!
//! Each handler renders its header, runs the use case with a console event
//! sink and prints the result view. Errors propagate to `main`.

pub mod clean;
pub mod config;
pub mod deploy;
pub mod history;
pub mod init;
pub mod service_account;
pub mod status;
