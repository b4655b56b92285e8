//! Code-hosting platform commands

use std::path::Path;

use crate::domain::ports::{CommandGateway, CommandSpec};
use crate::error::{ManagerError, ManagerResult};

pub struct CodeHost<'a> {
    gateway: &'a dyn CommandGateway,
    repo_dir: &'a Path,
}

impl<'a> CodeHost<'a> {
    /// `repo_dir` is the checkout the host CLI resolves the repository from.
    pub fn new(gateway: &'a dyn CommandGateway, repo_dir: &'a Path) -> Self {
        Self { gateway, repo_dir }
    }

    /// `owner/name` of the repository backing the checkout
    pub fn repository_name(&self) -> ManagerResult<String> {
        let output = self.gateway.run(
            &CommandSpec::new("gh")
                .args(["repo", "view", "--json", "nameWithOwner", "-q", ".nameWithOwner"])
                .cwd(self.repo_dir),
        )?;
        let name = output.stdout_trimmed();
        if name.is_empty() {
            return Err(ManagerError::ExternalCommandFailed {
                program: "gh".to_string(),
                code: Some(0),
                output: "could not determine repository name".to_string(),
            });
        }
        Ok(name.to_string())
    }

    pub fn delete_repository(&self, name_with_owner: &str) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gh")
                .args(["repo", "delete", name_with_owner, "--yes"])
                .cwd(self.repo_dir),
        )?;
        Ok(())
    }

    /// Upload `value` as repository secret `name`; the value goes over stdin
    /// and never appears in the argument list.
    pub fn set_secret(&self, name: &str, value: Vec<u8>) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gh")
                .args(["secret", "set", name])
                .cwd(self.repo_dir)
                .stdin(value),
        )?;
        Ok(())
    }
}
