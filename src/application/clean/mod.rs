//! Clean Module
//!
//! Best-effort teardown of everything init and deploy created.
//!
//! ## Structure
//!
//! - `options` - `CleanOptions`
//! - `result` - `CleanReport`
//! - `use_case` - `CleanUseCase`

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::CleanReport;
pub use use_case::CleanUseCase;
