//! Test environment builder for isolated bffctl runs.
//!
//! Every `TestEnv` owns a temp directory holding the project (`demo-app`),
//! a `bin/` directory of fake external tools and a log file the fakes append
//! their invocations to. The binary always runs with `-C <project>`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Directory name of the managed project, and therefore its name
pub const PROJECT_NAME: &str = "demo-app";

/// Cloud project id injected through the environment
pub const CLOUD_PROJECT: &str = "test-proj";

/// Programs the workflows shell out to
pub const FAKE_TOOLS: &[&str] = &["gcloud", "docker", "gh", "colima", "git", "npm", "uv"];

/// Result of running one bffctl command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    root: TempDir,
    project: PathBuf,
    bin_dir: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    /// Empty project directory, fake tools installed.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let project = root.path().join(PROJECT_NAME);
        let bin_dir = root.path().join("bin");
        let log = root.path().join("tools.log");
        std::fs::create_dir_all(&project).expect("Failed to create project dir");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        let env = Self {
            root,
            project,
            bin_dir,
            log,
        };
        env.install_fake_tools();
        env
    }

    pub fn project_root(&self) -> &Path {
        &self.project
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project.join(relative)
    }

    /// Where the fake `gh secret set` stores what it read from stdin
    pub fn secret_path(&self, name: &str) -> PathBuf {
        self.root.path().join(format!("secret_{}", name))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write project file");
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parsed `manager/.manifest`
    pub fn ledger(&self) -> Value {
        let raw = self.read_project_file("manager/.manifest");
        serde_json::from_str(&raw).expect("ledger is valid JSON")
    }

    /// Operation names recorded in the ledger, oldest first
    pub fn operations(&self) -> Vec<String> {
        self.ledger()["operations"]
            .as_array()
            .map(|ops| {
                ops.iter()
                    .filter_map(|op| op["operation"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Invocations seen by the fake tools, one `program args...` per line
    pub fn tool_calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn called(&self, prefix: &str) -> bool {
        self.tool_calls().iter().any(|call| call.starts_with(prefix))
    }

    /// Replace a fake tool with a custom shell body; the call is still logged.
    pub fn override_tool(&self, tool: &str, body: &str) {
        let script = format!(
            "#!/bin/sh\necho \"{tool} $*\" >> \"{log}\"\n{body}\n",
            tool = tool,
            log = self.log.display(),
            body = body
        );
        let path = self.bin_dir.join(tool);
        std::fs::write(&path, script).expect("Failed to write fake tool");
        make_executable(&path);
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with(args, "", &[])
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with(args, input, &[])
    }

    /// Run with piped stdin and extra environment variables.
    pub fn run_with(&self, args: &[&str], input: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut full = vec!["-C".to_string(), self.project.display().to_string()];
        full.extend(args.iter().map(|a| a.to_string()));
        self.spawn(self.root.path(), &full, input, env_vars)
    }

    /// Run from `cwd` with exactly `args`; no `-C` is added.
    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.spawn(cwd, &args, "", &[])
    }

    fn spawn(
        &self,
        cwd: &Path,
        args: &[String],
        input: &str,
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let path = format!(
            "{}:{}",
            self.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bffctl"));
        cmd.current_dir(cwd)
            .args(args)
            .env("PATH", path)
            .env("NO_COLOR", "1")
            .env("BFFCTL_PROJECT_ID", CLOUD_PROJECT)
            .env_remove("BFFCTL_LOG")
            .env_remove("BFFCTL_REGION")
            .env_remove("BFFCTL_REGISTRY")
            .env_remove("BFFCTL_TEMPLATE_REPO")
            .env_remove("BFFCTL_COMMAND_TIMEOUT")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute bffctl");
        if let Some(mut stdin) = child.stdin.take() {
            // bffctl may exit before reading everything
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for bffctl");
        to_result(output)
    }

    fn install_fake_tools(&self) {
        for tool in FAKE_TOOLS {
            let script = fake_tool_script(tool, &self.log, self.root.path());
            let path = self.bin_dir.join(tool);
            std::fs::write(&path, script).expect("Failed to write fake tool");
            make_executable(&path);
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Shell script that logs its argv and exits with `$FAKE_<TOOL>_EXIT`
/// (default 0). A few invocations get canned behaviour.
fn fake_tool_script(tool: &str, log: &Path, scratch: &Path) -> String {
    let extra = match tool {
        "gh" => format!(
            r#"if [ "$1 $2" = "repo view" ]; then echo "acme/{name}"; fi
if [ "$1 $2" = "secret set" ]; then cat > "{scratch}/secret_$3"; fi
"#,
            name = PROJECT_NAME,
            scratch = scratch.display()
        ),
        "gcloud" => r#"if [ "$3" = "describe" ]; then exit "${FAKE_GCLOUD_DESCRIBE_EXIT:-1}"; fi
if [ "$3 $4" = "keys create" ]; then echo '{"type":"service_account"}' > "$5"; fi
"#
        .to_string(),
        _ => String::new(),
    };

    format!(
        "#!/bin/sh\necho \"{tool} $*\" >> \"{log}\"\n{extra}exit \"${{FAKE_{upper}_EXIT:-0}}\"\n",
        tool = tool,
        log = log.display(),
        extra = extra,
        upper = tool.to_uppercase()
    )
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat fake tool")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to chmod fake tool");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
