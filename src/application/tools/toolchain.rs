//! Local build tools: npm, uv and git

use std::path::Path;

use crate::domain::ports::{CommandGateway, CommandSpec};
use crate::error::ManagerResult;

pub struct Toolchain<'a> {
    gateway: &'a dyn CommandGateway,
}

impl<'a> Toolchain<'a> {
    pub fn new(gateway: &'a dyn CommandGateway) -> Self {
        Self { gateway }
    }

    pub fn npm_install(&self, dir: &Path) -> ManagerResult<()> {
        self.gateway
            .run(&CommandSpec::new("npm").arg("install").cwd(dir).inherit_output())?;
        Ok(())
    }

    pub fn npm_build(&self, dir: &Path) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("npm")
                .args(["run", "build"])
                .cwd(dir)
                .inherit_output(),
        )?;
        Ok(())
    }

    pub fn uv_sync(&self, dir: &Path) -> ManagerResult<()> {
        self.gateway
            .run(&CommandSpec::new("uv").arg("sync").cwd(dir).inherit_output())?;
        Ok(())
    }

    /// Clone `url` into `destination`, running from `cwd`.
    pub fn git_clone(&self, url: &str, destination: &Path, cwd: &Path) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("git")
                .args(["clone", url])
                .arg(destination.display().to_string())
                .cwd(cwd),
        )?;
        Ok(())
    }
}
