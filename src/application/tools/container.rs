//! Container runtime and image commands

use std::path::Path;

use crate::domain::ports::{CommandGateway, CommandSpec};
use crate::error::ManagerResult;

pub struct ContainerTool<'a> {
    gateway: &'a dyn CommandGateway,
    runtime_program: &'a str,
}

impl<'a> ContainerTool<'a> {
    pub fn new(gateway: &'a dyn CommandGateway, runtime_program: &'a str) -> Self {
        Self {
            gateway,
            runtime_program,
        }
    }

    /// Start the container runtime and return a guard that stops it on drop.
    pub fn start_runtime(&self) -> ManagerResult<RuntimeGuard<'a>> {
        self.gateway.run(
            &CommandSpec::new(self.runtime_program)
                .arg("start")
                .inherit_output(),
        )?;
        Ok(RuntimeGuard {
            gateway: self.gateway,
            runtime_program: self.runtime_program,
        })
    }

    pub fn build(&self, image: &str, context_dir: &Path) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("docker")
                .args(["build", "-t", image, "."])
                .cwd(context_dir)
                .inherit_output(),
        )?;
        Ok(())
    }

    pub fn push(&self, image: &str) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("docker")
                .args(["push", image])
                .inherit_output(),
        )?;
        Ok(())
    }

    /// Ids of every container (running or not) created from `image`
    pub fn containers_for(&self, image: &str) -> ManagerResult<Vec<String>> {
        let output = self.gateway.run(&CommandSpec::new("docker").args([
            "ps",
            "-a",
            "-q",
            "--filter",
            &format!("ancestor={}", image),
        ]))?;
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect())
    }

    pub fn stop_containers(&self, ids: &[String]) -> ManagerResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        self.gateway
            .run(&CommandSpec::new("docker").arg("stop").args(ids.iter().cloned()))?;
        Ok(())
    }

    pub fn remove_image(&self, image: &str) -> ManagerResult<()> {
        self.gateway
            .run(&CommandSpec::new("docker").args(["rmi", image, "--force"]))?;
        Ok(())
    }
}

/// Stops the container runtime when dropped, whatever the outcome of the
/// work done while it was up.
pub struct RuntimeGuard<'a> {
    gateway: &'a dyn CommandGateway,
    runtime_program: &'a str,
}

impl Drop for RuntimeGuard<'_> {
    fn drop(&mut self) {
        let spec = CommandSpec::new(self.runtime_program).arg("stop").cleanup();
        if let Err(err) = self.gateway.run(&spec) {
            tracing::warn!(program = self.runtime_program, error = %err, "failed to stop container runtime");
        }
    }
}
