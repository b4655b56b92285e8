//! Operator confirmation providers
//!
//! `TerminalConfirmer` drives dialoguer prompts when stdin is a TTY.
//! `LineConfirmer` reads plain lines, which keeps piped and scripted input
//! working.

mod line;
mod terminal;

pub use line::{LineConfirmer, StdinConfirmer};
pub use terminal::TerminalConfirmer;
