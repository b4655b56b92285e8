//! State flags recorded in the ledger
//!
//! The ledger's `state` map is open-ended; these are the flags the workflows
//! read and write.

/// Known lifecycle flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateFlag {
    /// Local init finished
    Initialized,
    /// Service is running on the compute platform
    Deployed,
    /// Container image was built and pushed
    DockerBuilt,
    /// Trust principal exists with its default roles
    ServiceAccountCreated,
    /// Principal credential was uploaded as a repository secret
    GithubSecretsConfigured,
}

impl StateFlag {
    pub const ALL: &'static [StateFlag] = &[
        StateFlag::Initialized,
        StateFlag::Deployed,
        StateFlag::DockerBuilt,
        StateFlag::ServiceAccountCreated,
        StateFlag::GithubSecretsConfigured,
    ];

    /// Key used in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            StateFlag::Initialized => "initialized",
            StateFlag::Deployed => "deployed",
            StateFlag::DockerBuilt => "docker_built",
            StateFlag::ServiceAccountCreated => "service_account_created",
            StateFlag::GithubSecretsConfigured => "github_secrets_configured",
        }
    }
}

impl std::fmt::Display for StateFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
