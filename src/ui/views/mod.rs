pub mod clean;
pub mod config;
pub mod deploy;
pub mod history;
pub mod init;
pub mod service_account;
pub mod status;
