//! Deploy Module
//!
//! Takes an initialized project to a running managed service with a working
//! CI pipeline.
//!
//! ## Structure
//!
//! - `options` - `DeployOptions`
//! - `result` - `DeployResult`
//! - `use_case` - `DeployUseCase`

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::{DeployUseCase, KEY_FILE_NAME};
