use bffctl::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> Option<String> {
    let first = warnings.first()?;
    let mut block = WarningBlock::new(format!("Unknown keys in {}", first.file.display()));
    for w in warnings {
        let mut line = match w.line {
            Some(line) => format!("'{}' (line {})", w.key, line),
            None => format!("'{}'", w.key),
        };
        if let Some(suggestion) = &w.suggestion {
            line.push_str(&format!(", did you mean '{}'?", suggestion));
        }
        block.add_line(line);
    }
    Some(block.render(ui.color, ui.unicode))
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if let Some(rendered) = render_config_warnings(warnings, ui) {
        eprint!("{}", rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_warnings_renders_nothing() {
        assert!(render_config_warnings(&[], &UiContext::plain()).is_none());
    }

    #[test]
    fn lists_each_unknown_key_with_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "regoin".to_string(),
            file: PathBuf::from("manager/config.toml"),
            line: Some(3),
            suggestion: Some("default_region".to_string()),
        }];
        let rendered = render_config_warnings(&warnings, &UiContext::plain()).unwrap();
        assert!(rendered.contains("[WARN] Unknown keys in manager/config.toml"));
        assert!(rendered.contains("'regoin' (line 3), did you mean 'default_region'?"));
    }
}
