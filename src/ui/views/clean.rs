use bffctl::application::{CleanOptions, CleanReport, StepOutcome};
use bffctl::domain::value_objects::ProjectDescriptor;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn render_clean_header(
    project: &ProjectDescriptor,
    options: &CleanOptions,
    ui: &UiContext,
) -> String {
    let mut header = CommandHeader::new(Icon::Clean, "bffctl clean");
    header.add("Project", project.name());
    header.add("Mode", options.mode());
    header.render(ui.color, ui.unicode)
}

pub fn render_clean_summary(result: &CleanReport, ui: &UiContext) -> String {
    let report = &result.report;
    let mut summary = if result.is_complete() {
        ResultSummary::success("Clean complete")
    } else {
        ResultSummary::partial("Clean finished with errors")
    };

    summary.add_stat("completed", report.completed());
    summary.add_stat("skipped", report.skipped());
    summary.add_stat("failed", report.failed());

    if result.ledger_reset {
        summary.add_info("Ledger reset to its initial state");
    }
    if result.local_removed {
        summary.add_info("Local project removed");
    }
    if report.outcome("restore_template") == Some(&StepOutcome::Completed) {
        summary.add_info("Fresh template cloned in its place");
    }

    for record in &report.steps {
        if let StepOutcome::Failed(error) = &record.outcome {
            summary.add_warning(format!("{}: {}", record.step, error));
        }
    }
    if !result.is_complete() {
        summary.add_next_step("Remove the remaining resources manually");
    }
    if result.local_removed {
        summary.add_next_step("Re-enter the project directory; the old one was replaced");
    }

    summary.render(ui.color, ui.unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bffctl::application::{StepRecord, WorkflowReport};

    fn report(steps: Vec<(&'static str, StepOutcome)>) -> WorkflowReport {
        WorkflowReport {
            workflow: "clean",
            steps: steps
                .into_iter()
                .map(|(step, outcome)| StepRecord { step, outcome })
                .collect(),
        }
    }

    #[test]
    fn partial_clean_lists_failed_phases() {
        let result = CleanReport {
            report: report(vec![
                ("delete_repository", StepOutcome::Failed("'gh' exited with code 1".into())),
                ("remove_containers", StepOutcome::Completed),
                ("delete_cloud_run_service", StepOutcome::Skipped("not deployed".into())),
                ("reset_ledger", StepOutcome::Completed),
            ]),
            ledger_reset: true,
            local_removed: false,
        };
        let out = render_clean_summary(&result, &UiContext::plain());

        assert!(out.contains("[WARN] Clean finished with errors"));
        assert!(out.contains("2 completed"));
        assert!(out.contains("1 skipped"));
        assert!(out.contains("1 failed"));
        assert!(out.contains("[WARN] delete_repository: 'gh' exited with code 1"));
        assert!(out.contains("[OK] Ledger reset to its initial state"));
        assert!(out.contains("Remove the remaining resources manually"));
    }

    #[test]
    fn full_clean_mentions_fresh_copy() {
        let result = CleanReport {
            report: report(vec![
                ("remove_local", StepOutcome::Completed),
                ("restore_template", StepOutcome::Completed),
            ]),
            ledger_reset: false,
            local_removed: true,
        };
        let out = render_clean_summary(&result, &UiContext::plain());
        assert!(out.contains("[OK] Clean complete"));
        assert!(out.contains("Fresh template cloned in its place"));
        assert!(!out.contains("Remove the remaining resources"));
    }

    #[test]
    fn header_shows_mode() {
        let project = ProjectDescriptor::new("/w/demo", "p", "gcr.io");
        let out = render_clean_header(&project, &CleanOptions { skip_local: true }, &UiContext::plain());
        assert!(out.contains("Mode:    skip_local"));
    }
}
