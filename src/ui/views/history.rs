use serde_json::Value;

use bffctl::application::inspect::render_value;
use bffctl::domain::entities::OperationRecord;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const EMPTY_HISTORY: &str = "No operations in history";

pub fn render_history(
    project_name: &str,
    records: &[OperationRecord],
    json: bool,
    ui: &UiContext,
) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_HISTORY);
    }

    let header = CommandHeader::new(
        Icon::History,
        format!("Operation History: {}", project_name),
    );
    let mut out = header.render(ui.color, ui.unicode);

    for record in records {
        out.push_str(&format!(
            "\n{} {}\n",
            ColoredText::dim(format!("[{}]", record.timestamp())).render(ui.color),
            ColoredText::plain(record.operation()).bold().render(ui.color)
        ));
        if !record.has_details() {
            continue;
        }
        match record.details() {
            Value::Object(map) if !json => {
                for (key, value) in map {
                    out.push_str(&format!("  {}: {}\n", key, render_value(value)));
                }
            }
            details => {
                let pretty = serde_json::to_string_pretty(details).unwrap_or_default();
                for line in pretty.lines() {
                    out.push_str(&format!("  {}\n", line));
                }
            }
        }
    }
    out
}
