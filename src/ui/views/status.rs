use serde_json::Value;

use bffctl::application::inspect::{render_value, StatusSnapshot};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// JSON truthiness: `false`, `null`, `0`, `""`, `[]` and `{}` are unset.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

pub fn render_status(snapshot: &StatusSnapshot, ui: &UiContext) -> String {
    let header = CommandHeader::new(
        Icon::Status,
        format!("Project Status: {}", snapshot.project_name),
    );
    let mut out = header.render(ui.color, ui.unicode);

    out.push_str(&format!("\n{}\n", ColoredText::plain("State:").bold().render(ui.color)));
    for (key, value) in &snapshot.state {
        let icon = if is_set(value) { Icon::Success } else { Icon::Error };
        out.push_str(&format!(
            "  {} {}: {}\n",
            icon.colored(ui.color, ui.unicode),
            key,
            render_value(value)
        ));
    }

    if !snapshot.config.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            ColoredText::plain("Configuration:").bold().render(ui.color)
        ));
        for (key, value) in &snapshot.config {
            out.push_str(&format!("  {}: {}\n", key, render_value(value)));
        }
    }

    if !snapshot.recent.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            ColoredText::plain(format!(
                "Operations History ({} total):",
                snapshot.total_operations
            ))
            .bold()
            .render(ui.color)
        ));
        for record in &snapshot.recent {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::dim(format!("[{}]", record.timestamp())).render(ui.color),
                record.operation()
            ));
            if record.has_details() {
                out.push_str(&format!("    Details: {}\n", record.details()));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bffctl::domain::entities::{Ledger, OperationRecord};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn ledger() -> Ledger {
        let mut state = BTreeMap::new();
        state.insert("initialized".to_string(), json!(true));
        state.insert("deployed".to_string(), json!(true));
        state.insert("docker_built".to_string(), json!(false));
        state.insert("region_locked".to_string(), json!("eu"));

        let mut config = BTreeMap::new();
        config.insert("project_name".to_string(), json!("my-app"));
        config.insert("region".to_string(), json!("europe-west4"));

        let operations = vec![
            OperationRecord::with_timestamp(
                "2026-01-05T10:00:00.000000",
                "init",
                json!({"type": "local"}),
            ),
            OperationRecord::with_timestamp(
                "2026-01-05T11:30:00.000000",
                "deploy_cloud_run",
                json!({"region": "europe-west4", "service_name": "my-app"}),
            ),
            OperationRecord::with_timestamp("2026-01-05T11:31:00.000000", "setup_backend", json!({})),
        ];
        Ledger::from_parts("2026-01-05T09:59:00.000000", operations, state, config)
    }

    #[test]
    fn truthiness_follows_json_values() {
        assert!(is_set(&json!(true)));
        assert!(is_set(&json!("x")));
        assert!(!is_set(&json!(0)));
        assert!(!is_set(&json!(null)));
        assert!(!is_set(&json!({})));
    }

    #[test]
    fn status_snapshot_plain() {
        let snapshot = StatusSnapshot::from_ledger(&ledger(), "my-app", false);
        let rendered = render_status(&snapshot, &UiContext::plain());

        insta::assert_snapshot!(rendered.trim_end(), @r"
[STATUS] Project Status: my-app

State:
  [OK] initialized: true
  [OK] deployed: true
  [FAIL] docker_built: false
  [FAIL] service_account_created: false
  [FAIL] github_secrets_configured: false
  [OK] region_locked: eu

Configuration:
  project_name: my-app
  region: europe-west4
");
    }

    #[test]
    fn verbose_status_lists_operations_with_details() {
        let snapshot = StatusSnapshot::from_ledger(&ledger(), "my-app", true);
        let rendered = render_status(&snapshot, &UiContext::plain());

        assert!(rendered.contains("Operations History (3 total):\n"));
        assert!(rendered.contains("  [2026-01-05T10:00:00.000000] init\n    Details: {\"type\":\"local\"}\n"));
        // records without details get no Details line
        assert!(rendered.ends_with("  [2026-01-05T11:31:00.000000] setup_backend\n"));
    }
}
