//! Configuration loading and project discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::LEDGER_RELATIVE_PATH;
use crate::error::{ManagerError, ManagerResult};

use super::types::{ColorMode, Config};

/// Location of the tool's own config file under the project root
pub const CONFIG_RELATIVE_PATH: &str = "manager/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ManagerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ManagerError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config if it exists, else defaults; env overrides on top.
///
/// A config file that exists but does not parse is an error rather than a
/// silent fallback, since it carries cloud project identifiers.
pub fn load_for_project(project_root: &Path) -> ManagerResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_RELATIVE_PATH);
    let (config, warnings) = if path.is_file() {
        tracing::debug!(path = %path.display(), "loading project config");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (BFFCTL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup (the process env in production).
pub(crate) fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(id) = non_empty("BFFCTL_PROJECT_ID") {
        config.platform.project_id = id.trim().to_string();
    }

    if let Some(region) = non_empty("BFFCTL_REGION") {
        config.platform.default_region = region.trim().to_string();
    }

    if let Some(registry) = non_empty("BFFCTL_REGISTRY") {
        config.platform.registry = registry.trim().to_string();
    }

    if let Some(repo) = non_empty("BFFCTL_TEMPLATE_REPO") {
        config.template.repository = repo.trim().to_string();
    }

    // BFFCTL_COMMAND_TIMEOUT (seconds, 0 disables)
    if let Some(raw) = non_empty("BFFCTL_COMMAND_TIMEOUT") {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.runtime.command_timeout_secs = secs,
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid BFFCTL_COMMAND_TIMEOUT"),
        }
    }

    // NO_COLOR wins over the config file
    if lookup("NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

/// Walk up from `start` to the nearest directory that looks like a managed
/// project. Falls back to `start` itself.
pub fn discover_project_root(start: &Path) -> PathBuf {
    const MARKERS: &[&str] = &[LEDGER_RELATIVE_PATH, ".git", "pyproject.toml"];

    start
        .ancestors()
        .find(|dir| MARKERS.iter().any(|m| dir.join(m).exists()))
        .unwrap_or(start)
        .to_path_buf()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "platform",
        "project_id",
        "default_region",
        "registry",
        "template",
        "repository",
        "placeholder",
        "runtime",
        "manage_container_runtime",
        "runtime_program",
        "command_timeout_secs",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
