use serde_json::json;

use super::*;
use crate::application::testing::{ScriptedConfirmer, ScriptedGateway, TestProject};
use crate::domain::ports::LedgerStore;
use crate::domain::value_objects::StateFlag;
use crate::error::ErrorKind;

#[test]
fn fresh_init_scaffolds_and_records_each_step() {
    let t = TestProject::new();
    t.write("pyproject.toml", "[project]\nname = \"bff-template\"\n");

    let report = InitUseCase::new(t.ctx())
        .execute(InitOptions::default())
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.completed(), 4);
    assert!(t.path(".env").is_file());
    assert_eq!(t.read("pyproject.toml"), "[project]\nname = \"my-app\"\n");
    assert!(t.path("frontend/package.json").is_file());
    assert!(t.read("frontend/index.html").contains("<title>BFF Template</title>"));
    assert_eq!(
        t.gateway.commands(),
        vec!["npm install", "npm run build", "uv sync"]
    );
    assert_eq!(
        t.operations(),
        vec![
            "ensure_env_file",
            "update_project_files",
            "setup_frontend",
            "setup_backend",
            "init"
        ]
    );
    assert!(t.ledger.flag(StateFlag::Initialized).unwrap());
    assert_eq!(
        t.ledger.get_config("project_name").unwrap(),
        Some(json!("my-app"))
    );
}

#[test]
fn existing_frontend_is_only_rebuilt() {
    let t = TestProject::new();
    t.write("frontend/package.json", "{}");

    InitUseCase::new(t.ctx())
        .execute(InitOptions::default())
        .unwrap();

    assert_eq!(t.read("frontend/package.json"), "{}");
    assert_eq!(t.gateway.commands(), vec!["npm run build", "uv sync"]);
}

#[test]
fn skip_frontend_build_skips_npm_build() {
    let t = TestProject::new();
    InitUseCase::new(t.ctx())
        .execute(InitOptions {
            skip_frontend_build: true,
        })
        .unwrap();

    assert!(!t.gateway.ran("npm run build"));
    assert!(t.gateway.ran("npm install"));
}

#[test]
fn public_index_is_copied_when_present() {
    let t = TestProject::new();
    t.write("frontend/public/index.html", "<html>custom</html>");

    InitUseCase::new(t.ctx())
        .execute(InitOptions::default())
        .unwrap();

    assert_eq!(t.read("frontend/index.html"), "<html>custom</html>");
}

#[test]
fn declining_reinit_touches_nothing() {
    let t = TestProject::new().with_confirmer(ScriptedConfirmer::new().answer(false));
    t.ledger.set_flag(StateFlag::Initialized).unwrap();
    let before = t.ledger.read_all().unwrap();

    let err = InitUseCase::new(t.ctx())
        .execute(InitOptions::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PreconditionDeclined);
    assert!(t.gateway.commands().is_empty());
    assert_eq!(t.ledger.read_all().unwrap(), before);
    assert!(!t.path(".env").exists());
}

#[test]
fn accepting_reinit_runs_again() {
    let t = TestProject::new().with_confirmer(ScriptedConfirmer::new().answer(true));
    t.ledger.set_flag(StateFlag::Initialized).unwrap();

    InitUseCase::new(t.ctx())
        .execute(InitOptions::default())
        .unwrap();

    assert_eq!(t.confirm.prompts(), vec!["Do you want to re-initialize?"]);
    assert!(t.gateway.ran("uv sync"));
}

#[test]
fn failing_step_stops_workflow_without_flag() {
    let t = TestProject::new().with_gateway(ScriptedGateway::new().fail("npm install"));

    let err = InitUseCase::new(t.ctx())
        .execute(InitOptions::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ExternalCommandFailed);
    assert!(!t.gateway.ran("uv sync"));
    assert!(!t.ledger.flag(StateFlag::Initialized).unwrap());
    assert_eq!(
        t.operations(),
        vec!["ensure_env_file", "update_project_files"]
    );
}

#[test]
fn missing_tool_is_reported_by_kind() {
    let t = TestProject::new().with_gateway(ScriptedGateway::new().missing("uv"));
    let err = InitUseCase::new(t.ctx())
        .execute(InitOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ToolNotFound);
}

#[test]
fn timed_out_backend_sync_is_a_timeout() {
    let t = TestProject::new().with_gateway(ScriptedGateway::new().time_out("uv sync"));

    let err = InitUseCase::new(t.ctx())
        .execute(InitOptions {
            skip_frontend_build: true,
        })
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(!t.ledger.flag(StateFlag::Initialized).unwrap());
    assert!(!t.operations().contains(&"setup_backend".to_string()));
}
