#![cfg(unix)]

mod common;

use common::{TestEnv, PROJECT_NAME};

fn template_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_project_file(
        "pyproject.toml",
        "[project]\nname = \"bff-template\"\nversion = \"0.1.0\"\n",
    );
    env.write_project_file("makefile", "local:\n\tuv run main.py\n");
    env
}

#[test]
fn init_scaffolds_frontend_and_records_every_step() {
    let env = template_env();
    let result = env.run(&["init", "--skip-frontend-build"]);

    assert!(result.success, "output:\n{}", result.combined_output());
    assert!(env.project_path(".env").is_file());
    assert!(env.project_path("frontend/package.json").is_file());
    assert!(env.project_path("frontend/index.html").is_file());
    assert!(env
        .read_project_file("pyproject.toml")
        .contains(&format!("name = \"{}\"", PROJECT_NAME)));

    assert!(env.called("npm install"));
    assert!(env.called("uv sync"));
    assert!(!env.called("npm run build"));

    let ledger = env.ledger();
    assert_eq!(ledger["state"]["initialized"], true);
    assert_eq!(ledger["config"]["project_name"], PROJECT_NAME);
    assert_eq!(
        env.operations(),
        vec![
            "ensure_env_file",
            "update_project_files",
            "setup_frontend",
            "setup_backend",
            "init"
        ]
    );
}

#[test]
fn init_builds_frontend_by_default() {
    let env = template_env();
    let result = env.run(&["init"]);

    assert!(result.success, "output:\n{}", result.combined_output());
    assert!(env.called("npm run build"));
}

#[test]
fn existing_frontend_is_not_rescaffolded() {
    let env = template_env();
    env.write_project_file("frontend/package.json", "{\"name\": \"custom\"}");

    let result = env.run(&["init", "--skip-frontend-build"]);
    assert!(result.success, "output:\n{}", result.combined_output());
    assert_eq!(
        env.read_project_file("frontend/package.json"),
        "{\"name\": \"custom\"}"
    );
    assert!(!env.called("npm install"));
}

#[test]
fn failing_backend_sync_stops_before_initialized() {
    let env = template_env();
    let result = env.run_with(&["init", "--skip-frontend-build"], "", &[("FAKE_UV_EXIT", "3")]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("'uv' failed"), "stderr: {}", result.stderr);

    let ledger = env.ledger();
    assert_eq!(ledger["state"]["initialized"], false);
    let ops = env.operations();
    assert!(ops.contains(&"setup_frontend".to_string()));
    assert!(!ops.contains(&"setup_backend".to_string()));
    assert!(!ops.contains(&"init".to_string()));
}

#[test]
fn declined_reinit_changes_nothing() {
    let env = template_env();
    assert!(env.run(&["init", "--skip-frontend-build"]).success);
    let before = env.operations();

    let result = env.run_with_input(&["init", "--skip-frontend-build"], "n\n");
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("already initialized"));
    assert!(result.stderr.contains("Aborted"), "stderr: {}", result.stderr);
    assert_eq!(env.operations(), before);
}

#[test]
fn ctrl_c_during_backend_sync_exits_130() {
    let env = template_env();
    // a terminal Ctrl+C reaches both bffctl and the foreground child
    env.override_tool("uv", "kill -INT $PPID\nkill -INT $$\nsleep 5");

    let result = env.run(&["init", "--skip-frontend-build"]);

    assert_eq!(result.exit_code, 130, "output:\n{}", result.combined_output());
    assert!(result
        .combined_output()
        .contains("Operation cancelled by user"));
    assert_eq!(env.ledger()["state"]["initialized"], false);
    assert!(!env.operations().contains(&"setup_backend".to_string()));
}

#[test]
fn rewritten_project_files_keep_their_mode() {
    use std::os::unix::fs::PermissionsExt;

    let env = template_env();
    let path = env.project_path("pyproject.toml");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let result = env.run(&["init", "--skip-frontend-build"]);

    assert!(result.success, "output:\n{}", result.combined_output());
    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
