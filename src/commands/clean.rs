//! Clean command handler
//!
//! Once the project name is confirmed the command succeeds even when some
//! phases failed; the summary lists what is left.

use anyhow::Result;

use bffctl::application::{CleanOptions, CleanUseCase};
use bffctl::presentation::Workspace;

use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::views::clean::{render_clean_header, render_clean_summary};

pub fn cmd_clean(ws: &Workspace, ui: &UiContext, skip_local: bool) -> Result<()> {
    let options = CleanOptions { skip_local };
    println!("{}", render_clean_header(&ws.project, &options, ui));

    let sink = ConsoleEventSink::stdout(*ui);
    let result = CleanUseCase::new(ws.context(&sink)).execute(options)?;

    print!("\n{}", render_clean_summary(&result, ui));
    Ok(())
}
