//! External collaborators
//!
//! Thin command builders over the [`CommandGateway`]. Each method issues one
//! invocation and maps its outcome into a `ManagerResult`; sequencing and
//! ledger updates belong to the use cases.
//!
//! [`CommandGateway`]: crate::domain::ports::CommandGateway

mod cloud;
mod code_host;
mod container;
mod toolchain;

pub use cloud::CloudPlatform;
pub use code_host::CodeHost;
pub use container::{ContainerTool, RuntimeGuard};
pub use toolchain::Toolchain;
