use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error: a one-line message, optional captured output, optional fix.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    details: Vec<String>,
    fix: Option<String>,
}

/// Captured tool output is cut to its last lines.
const MAX_DETAIL_LINES: usize = 8;

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
            fix: None,
        }
    }

    pub fn with_output(mut self, output: &str) -> Self {
        let lines: Vec<&str> = output.trim().lines().collect();
        let start = lines.len().saturating_sub(MAX_DETAIL_LINES);
        self.details = lines[start..].iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);
        b.add_empty();
        b.add_line(self.message.as_str());

        if !self.details.is_empty() {
            b.add_empty();
            for line in &self.details {
                b.add_line(ColoredText::dim(line.as_str()).render(supports_color));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
