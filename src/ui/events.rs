//! Console rendering of workflow progress

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use unicode_width::UnicodeWidthStr;

use bffctl::domain::ports::{WorkflowEvent, WorkflowEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Default)]
struct Progress {
    total: usize,
    index: usize,
    label: String,
}

/// Prints one line per step transition; external tool output that streams
/// between the lines is left untouched.
pub struct ConsoleEventSink<W: Write = Stdout> {
    ui: UiContext,
    out: RefCell<W>,
    progress: RefCell<Progress>,
}

impl ConsoleEventSink<Stdout> {
    pub fn stdout(ui: UiContext) -> Self {
        Self::new(ui, io::stdout())
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(ui: UiContext, out: W) -> Self {
        Self {
            ui,
            out: RefCell::new(out),
            progress: RefCell::new(Progress::default()),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    fn line(&self, text: String) {
        self.emit(&format!("{}\n", text));
    }

    /// `[i/n]` for the next step
    fn advance(&self) -> String {
        let mut progress = self.progress.borrow_mut();
        progress.index += 1;
        if progress.total == 0 {
            return String::new();
        }
        format!("[{}/{}] ", progress.index, progress.total)
    }

    fn render_plan(&self, title: &str, entries: &[(String, String)]) -> String {
        let width = entries.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
        let mut b = Box::with_title(
            ColoredText::info(title).bold().render(self.ui.color),
        )
        .style(BoxStyle::Info);
        b.add_empty();
        for (key, value) in entries {
            let pad = " ".repeat(width - key.width());
            b.add_line(format!(
                "{}{} {}",
                ColoredText::dim(format!("{}:", key)).render(self.ui.color),
                pad,
                value
            ));
        }
        b.render(self.ui.color, self.ui.unicode)
    }
}

fn humanize(step: &str) -> String {
    step.replace('_', " ")
}

impl<W: Write> WorkflowEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: WorkflowEvent) {
        match event {
            WorkflowEvent::Started { steps, .. } => {
                *self.progress.borrow_mut() = Progress {
                    total: steps,
                    ..Progress::default()
                };
            }
            WorkflowEvent::StepStarted { label, .. } => {
                let counter = self.advance();
                self.line(format!(
                    "\n{} {}{}",
                    self.icon(Icon::Progress),
                    ColoredText::dim(counter).render(self.ui.color),
                    ColoredText::plain(label.as_str()).bold().render(self.ui.color)
                ));
                self.progress.borrow_mut().label = label;
            }
            WorkflowEvent::StepCompleted { .. } => {
                let label = self.progress.borrow().label.clone();
                self.line(format!("{} {}", self.icon(Icon::Success), label));
            }
            WorkflowEvent::StepSkipped { step, reason } => {
                let counter = self.advance();
                self.line(format!(
                    "\n{} {}{} {}",
                    self.icon(Icon::Pending),
                    ColoredText::dim(counter).render(self.ui.color),
                    humanize(step),
                    ColoredText::dim(format!("(skipped: {})", reason)).render(self.ui.color)
                ));
            }
            WorkflowEvent::StepFailed { error, .. } => {
                let label = self.progress.borrow().label.clone();
                self.line(format!(
                    "{} {}: {}",
                    self.icon(Icon::Error),
                    label,
                    ColoredText::error(error).render(self.ui.color)
                ));
            }
            WorkflowEvent::Plan { title, entries } => {
                self.emit(&format!("\n{}", self.render_plan(&title, &entries)));
            }
            WorkflowEvent::Note { message } => {
                self.line(format!(
                    "{} {}",
                    self.icon(Icon::Arrow),
                    ColoredText::dim(message).render(self.ui.color)
                ));
            }
            WorkflowEvent::Warning { message } => {
                self.line(format!(
                    "{} {}",
                    self.icon(Icon::Warning),
                    ColoredText::warning(message).render(self.ui.color)
                ));
            }
            WorkflowEvent::Finished {
                workflow,
                completed,
                failed,
            } => {
                tracing::debug!(workflow, completed, failed, "workflow finished");
            }
        }
    }
}
