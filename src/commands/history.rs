//! History command handler

use anyhow::Result;

use bffctl::application::inspect;
use bffctl::presentation::Workspace;

use crate::ui::context::UiContext;
use crate::ui::views::history::render_history;

pub fn cmd_history(ws: &Workspace, ui: &UiContext, limit: Option<usize>, json: bool) -> Result<()> {
    let records = inspect::history(&ws.ledger, limit)?;
    print!("{}", render_history(ws.project.name(), &records, json, ui));
    Ok(())
}
