//! Terminal rendering for the bffctl binary
//!
//! Building blocks go from `theme` tokens to `primitives` (icons, colored
//! text), `widgets` (boxes) and `blocks` (headers, summaries, errors).
//! `views` compose them per command; `events` renders live workflow progress.

pub mod blocks;
pub mod context;
pub mod error;
pub mod events;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
