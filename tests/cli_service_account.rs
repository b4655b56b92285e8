#![cfg(unix)]

mod common;

use common::{TestEnv, CLOUD_PROJECT, PROJECT_NAME};

fn email() -> String {
    format!("{}-sa@{}.iam.gserviceaccount.com", PROJECT_NAME, CLOUD_PROJECT)
}

#[test]
fn create_when_absent() {
    let env = TestEnv::new();
    let result = env.run(&["service-account", "create"]);

    assert!(result.success, "output:\n{}", result.combined_output());
    assert!(result.stdout.contains("bffctl service-account create"));
    assert!(result.stdout.contains(&format!("Account: {}", email())));
    assert!(result.stdout.contains(&format!("Service account created: {}", email())));
    assert!(env.called(&format!(
        "gcloud iam service-accounts create {}-sa --display-name={} Service Account",
        PROJECT_NAME, PROJECT_NAME
    )));
    assert_eq!(env.operations(), vec!["create_service_account"]);
}

#[test]
fn create_is_a_no_op_when_present() {
    let env = TestEnv::new();
    let result = env.run_with(
        &["service-account", "create"],
        "",
        &[("FAKE_GCLOUD_DESCRIBE_EXIT", "0")],
    );

    assert!(result.success, "output:\n{}", result.combined_output());
    assert!(result.stdout.contains("already exists"));
    assert!(!env.called("gcloud iam service-accounts create"));
    assert_eq!(env.ledger()["operations"][0]["details"]["status"], "already_exists");
}

#[test]
fn add_permissions_uses_given_roles() {
    let env = TestEnv::new();
    let result = env.run(&[
        "service-account",
        "add-permissions",
        "--roles",
        "roles/viewer",
        "roles/run.invoker",
    ]);

    assert!(result.success, "output:\n{}", result.combined_output());
    assert!(result.stdout.contains("Granted 2 role(s)"));
    let bindings: Vec<_> = env
        .tool_calls()
        .into_iter()
        .filter(|c| c.starts_with("gcloud projects add-iam-policy-binding"))
        .collect();
    assert_eq!(bindings.len(), 2);
    assert!(bindings[0].ends_with("--role=roles/viewer"));
}

#[test]
fn delete_requires_literal_yes() {
    let env = TestEnv::new();
    let result = env.run_with_input(&["service-account", "delete"], "y\n");

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Aborted"));
    assert!(env.tool_calls().is_empty());
}

#[test]
fn confirmed_delete_records_outcome() {
    let env = TestEnv::new();
    let result = env.run_with_input(&["service-account", "delete"], "yes\n");

    assert!(result.success, "output:\n{}", result.combined_output());
    assert!(env.called(&format!("gcloud iam service-accounts delete {} --quiet", email())));
    assert_eq!(env.ledger()["operations"][0]["details"]["status"], "deleted");
}

#[test]
fn failed_delete_exits_one_and_is_recorded() {
    let env = TestEnv::new();
    let result = env.run_with(
        &["service-account", "delete"],
        "yes\n",
        &[("FAKE_GCLOUD_EXIT", "2")],
    );

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Could not delete service account"));
    // the failure goes through the normal error block
    assert!(result.stderr.contains("'gcloud' failed"), "stderr: {}", result.stderr);
    assert_eq!(env.ledger()["operations"][0]["details"]["status"], "failed");
}

#[test]
fn remove_permissions_declined_runs_nothing() {
    let env = TestEnv::new();
    let result = env.run_with_input(&["service-account", "remove-permissions"], "no\n");

    assert_eq!(result.exit_code, 1);
    assert!(!env.called("gcloud"));
}
