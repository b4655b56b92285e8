//! Init Options

/// Options for the init use case
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Install front-end dependencies but do not run the production build
    pub skip_frontend_build: bool,
}
