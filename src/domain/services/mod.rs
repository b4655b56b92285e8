//! Domain Services
//!
//! Pure text transformations applied to template files. Reading and writing
//! the files is the caller's job.

mod placeholders;

pub use placeholders::{activate_pipeline, rewrite_metadata_name, rewrite_pipeline, PipelineValues};
