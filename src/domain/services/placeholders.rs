//! Template placeholder rewriting
//!
//! The template ships with fixed markers in its project metadata and its CI
//! pipeline. Init swaps the metadata name; deploy swaps the pipeline markers
//! and switches the pipeline on.

/// Marker for the repository secret that holds the principal's key
pub const SECRET_MARKER: &str = "BFF_TEMPLATE_SA";
/// Marker for the compute service name
pub const SERVICE_MARKER: &str = "bff-template-service-name";
/// Marker for the container image coordinate
pub const IMAGE_MARKER: &str = "bff-template-image-url";
/// Guard line that keeps the template pipeline disabled
pub const DISABLED_GUARD: &str = "if: false";

/// Replace `name = "<placeholder>"` with `name = "<name>"`.
///
/// Returns `None` when the placeholder does not occur, so callers can skip
/// the write.
pub fn rewrite_metadata_name(content: &str, placeholder: &str, name: &str) -> Option<String> {
    let needle = format!("name = \"{}\"", placeholder);
    if !content.contains(&needle) {
        return None;
    }
    Some(content.replace(&needle, &format!("name = \"{}\"", name)))
}

/// Project-specific values substituted into the pipeline
#[derive(Debug, Clone, Copy)]
pub struct PipelineValues<'a> {
    pub secret_name: &'a str,
    pub service_name: &'a str,
    pub image_url: &'a str,
}

/// Substitute every pipeline marker and activate the pipeline.
pub fn rewrite_pipeline(content: &str, values: PipelineValues<'_>) -> String {
    let replaced = content
        .replace(SECRET_MARKER, values.secret_name)
        .replace(SERVICE_MARKER, values.service_name)
        .replace(IMAGE_MARKER, values.image_url);
    activate_pipeline(&replaced)
}

/// Drop every line whose trimmed content is exactly `if: false`.
///
/// Line endings of the kept lines are preserved.
pub fn activate_pipeline(content: &str) -> String {
    content
        .split_inclusive('\n')
        .filter(|line| line.trim() != DISABLED_GUARD)
        .collect()
}
