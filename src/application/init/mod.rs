//! Init Module
//!
//! Local scaffold of a freshly cloned template.
//!
//! ## Structure
//!
//! - `options` - `InitOptions`
//! - `scaffold` - Front-end files written when the template has none
//! - `use_case` - `InitUseCase`

mod options;
mod scaffold;
mod use_case;

pub use options::InitOptions;
pub use use_case::InitUseCase;

#[cfg(test)]
mod tests;
