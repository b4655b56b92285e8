use bffctl::application::DeployResult;
use bffctl::domain::value_objects::ProjectDescriptor;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn render_deploy_header(project: &ProjectDescriptor, ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "bffctl deploy");
    header.add("Project", project.name());
    header.render(ui.color, ui.unicode)
}

pub fn render_deploy_summary(result: &DeployResult, ui: &UiContext) -> String {
    let mut summary = ResultSummary::success("Deployment complete");
    summary.add_stat("steps completed", result.report.completed());
    summary.add_info(format!("Image: {}", result.image_url));
    summary.add_info(format!("Region: {}", result.region));
    summary.add_next_step("Configure the backend service with a Serverless NEG");
    summary.add_next_step("Add IAP access");
    summary.add_next_step("Update the URL mapping");
    summary.render(ui.color, ui.unicode)
}
