//! Init command handler

use anyhow::Result;

use bffctl::application::{InitOptions, InitUseCase};
use bffctl::presentation::Workspace;

use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::views::init::{render_init_header, render_init_summary};

pub fn cmd_init(ws: &Workspace, ui: &UiContext, skip_frontend_build: bool) -> Result<()> {
    print!("{}", render_init_header(&ws.project, ui));

    let sink = ConsoleEventSink::stdout(*ui);
    let report = InitUseCase::new(ws.context(&sink)).execute(InitOptions {
        skip_frontend_build,
    })?;

    print!("\n{}", render_init_summary(&report, ui));
    Ok(())
}
