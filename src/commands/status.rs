//! Status command handler

use anyhow::Result;

use bffctl::application::inspect;
use bffctl::presentation::Workspace;

use crate::ui::context::UiContext;
use crate::ui::views::status::render_status;

pub fn cmd_status(ws: &Workspace, ui: &UiContext) -> Result<()> {
    let snapshot = inspect::status(&ws.ledger, ws.project.name(), ui.verbose > 0)?;
    print!("{}", render_status(&snapshot, ui));
    Ok(())
}
