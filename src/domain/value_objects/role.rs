//! IAM role value objects

use std::fmt;

/// A single IAM role such as `roles/run.developer`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role(String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::new(s)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role(s)
    }
}

const DEFAULT_GRANT: &[&str] = &[
    "roles/artifactregistry.writer",
    "roles/run.developer",
    "roles/iam.serviceAccountUser",
];

const DEFAULT_REVOKE: &[&str] = &[
    "roles/run.admin",
    "roles/iam.serviceAccountUser",
    "roles/storage.admin",
    "roles/artifactregistry.admin",
    "roles/run.developer",
];

/// Ordered set of roles to grant or revoke
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    pub fn new(roles: Vec<Role>) -> Self {
        Self(roles)
    }

    /// Roles granted to a fresh deployment principal
    pub fn default_grant() -> Self {
        Self(DEFAULT_GRANT.iter().map(|r| Role::from(*r)).collect())
    }

    /// Roles stripped by `remove-permissions` when none are named
    pub fn default_revoke() -> Self {
        Self(DEFAULT_REVOKE.iter().map(|r| Role::from(*r)).collect())
    }

    /// Explicit roles win; an empty or missing list falls back to `default`.
    pub fn or_default(explicit: Option<Vec<String>>, default: RoleSet) -> Self {
        match explicit {
            Some(roles) if !roles.is_empty() => Self(roles.into_iter().map(Role::from).collect()),
            _ => default,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|r| r.0.clone()).collect()
    }
}
