//! Command gateway implementations

mod interrupt;
mod process;

pub use interrupt::InterruptFlag;
pub use process::ProcessGateway;
