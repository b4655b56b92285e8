use bffctl::application::WorkflowReport;
use bffctl::domain::value_objects::ProjectDescriptor;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn render_init_header(project: &ProjectDescriptor, ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Init, "bffctl init");
    header.add("Project", project.name());
    header.add("Root", project.root().display().to_string());
    header.render(ui.color, ui.unicode)
}

pub fn render_init_summary(report: &WorkflowReport, ui: &UiContext) -> String {
    let mut summary = ResultSummary::success("Project initialized");
    summary.add_stat("steps completed", report.completed());
    summary.add_next_step("Set your Python interpreter to: .venv");
    summary.add_next_step("Run 'make local' to start the app");
    summary.render(ui.color, ui.unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bffctl::application::{StepOutcome, StepRecord};

    #[test]
    fn summary_counts_steps_and_lists_next_steps() {
        let report = WorkflowReport {
            workflow: "init",
            steps: vec![
                StepRecord {
                    step: "ensure_env_file",
                    outcome: StepOutcome::Completed,
                },
                StepRecord {
                    step: "setup_backend",
                    outcome: StepOutcome::Completed,
                },
            ],
        };
        let out = render_init_summary(&report, &UiContext::plain());
        assert!(out.contains("[OK] Project initialized"));
        assert!(out.contains("2 steps completed"));
        assert!(out.contains("[>] 2. Run 'make local' to start the app"));
    }

    #[test]
    fn header_names_project() {
        let project = ProjectDescriptor::new("/work/My-App", "proj", "gcr.io");
        let out = render_init_header(&project, &UiContext::plain());
        assert!(out.contains("[INIT] bffctl init\n"));
        assert!(out.contains("Project: my-app"));
    }
}
