use serde_json::Value;

use bffctl::application::inspect::render_value;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_config_set(key: &str, value: &str, ui: &UiContext) -> String {
    format!(
        "{} Set {} = {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        key,
        value
    )
}

pub fn render_config_list(entries: &[(String, Value)], ui: &UiContext) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::plain("Current Configuration:").bold().render(ui.color)
    );
    if entries.is_empty() {
        out.push_str(&format!("  {}\n", ColoredText::dim("(none)").render(ui.color)));
    }
    for (key, value) in entries {
        out.push_str(&format!("  {}: {}\n", key, render_value(value)));
    }
    out
}
