//! Deploy command handler

use anyhow::Result;

use bffctl::application::{DeployOptions, DeployUseCase};
use bffctl::presentation::Workspace;

use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary};

pub fn cmd_deploy(ws: &Workspace, ui: &UiContext, region: Option<String>) -> Result<()> {
    print!("{}", render_deploy_header(&ws.project, ui));

    let sink = ConsoleEventSink::stdout(*ui);
    let result = DeployUseCase::new(ws.context(&sink)).execute(&DeployOptions { region })?;

    print!("\n{}", render_deploy_summary(&result, ui));
    Ok(())
}
