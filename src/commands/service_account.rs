//! Service-account command handler

use anyhow::Result;

use bffctl::application::ServiceAccountManager;
use bffctl::domain::ports::ConfirmStyle;
use bffctl::presentation::{ServiceAccountAction, Workspace};
use bffctl::{ErrorKind, ManagerError};

use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::views::service_account::{
    render_account_header, render_created, render_deleted, render_roles,
};

pub fn cmd_service_account(
    ws: &Workspace,
    ui: &UiContext,
    action: ServiceAccountAction,
) -> Result<()> {
    let sink = ConsoleEventSink::stdout(*ui);
    let manager = ServiceAccountManager::new(ws.context(&sink));
    let email = manager.email();
    print!("{}", render_account_header(action.name(), &email, ui));

    match action {
        ServiceAccountAction::Create => {
            let outcome = manager.create()?;
            print!("{}", render_created(&email, outcome, ui));
        }
        ServiceAccountAction::Delete => {
            confirm(
                ws,
                &format!("Are you sure you want to delete the service account '{}'?", email),
                "service account deletion",
            )?;
            match manager.delete() {
                Ok(()) => print!("{}", render_deleted(&email, true, ui)),
                Err(err) if err.kind() == ErrorKind::ExternalCommandFailed => {
                    print!("{}", render_deleted(&email, false, ui));
                    return Err(err.into());
                }
                Err(err) => return Err(err.into()),
            }
        }
        ServiceAccountAction::AddPermissions { roles } => {
            let granted = manager.grant_roles(roles)?;
            print!("{}", render_roles("Granted", &email, &granted, ui));
        }
        ServiceAccountAction::RemovePermissions { roles } => {
            confirm(
                ws,
                &format!("Are you sure you want to remove permissions from '{}'?", email),
                "permission removal",
            )?;
            let revoked = manager.revoke_roles(roles)?;
            print!("{}", render_roles("Revoked", &email, &revoked, ui));
        }
    }
    Ok(())
}

/// Destructive actions need a literal `yes`.
fn confirm(ws: &Workspace, prompt: &str, what: &str) -> Result<()> {
    if ws.confirm.confirm(prompt, ConfirmStyle::ExplicitYes) {
        Ok(())
    } else {
        Err(ManagerError::declined(what).into())
    }
}
