use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed end-of-command summary: title, counts, notes and next steps.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
}

impl ResultSummary {
    fn with_status(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::with_status(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_status(title, false)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_next_step(&mut self, hint: impl Into<String>) {
        self.next_steps.push(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            )
        };
        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut b = Box::with_title(header).style(style);

        if !self.stats.is_empty() {
            b.add_empty();
            for (label, count) in &self.stats {
                b.add_line(format!("{} {}", count, label));
            }
        }

        for (icon, lines) in [(Icon::Success, &self.infos), (Icon::Warning, &self.warnings)] {
            if lines.is_empty() {
                continue;
            }
            b.add_empty();
            for line in lines {
                b.add_line(format!(
                    "{} {}",
                    icon.colored(supports_color, supports_unicode),
                    line
                ));
            }
        }

        if !self.next_steps.is_empty() {
            b.add_empty();
            b.add_line(ColoredText::dim("Next steps:").render(supports_color));
            for (i, step) in self.next_steps.iter().enumerate() {
                b.add_line(format!(
                    "{} {}. {}",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    i + 1,
                    step
                ));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_success_icon_in_title() {
        let mut summary = ResultSummary::success("Deployment complete");
        summary.add_stat("steps completed", 5);

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[OK] Deployment complete"));
        assert!(rendered.contains("5 steps completed"));
    }

    #[test]
    fn partial_summary_lists_warnings_and_numbered_steps() {
        let mut summary = ResultSummary::partial("Clean finished with errors");
        summary.add_warning("delete_repository: 'gh' exited with code 1");
        summary.add_next_step("Fix the error");
        summary.add_next_step("Run bffctl clean again");

        let rendered = summary.render(false, true);
        assert!(rendered.contains("⚠ Clean finished with errors"));
        assert!(rendered.contains("⚠ delete_repository: 'gh' exited with code 1"));
        assert!(rendered.contains("↳ 2. Run bffctl clean again"));
    }
}
