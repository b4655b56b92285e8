use bffctl::application::CreateOutcome;
use bffctl::domain::value_objects::RoleSet;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_account_header(action: &str, email: &str, ui: &UiContext) -> String {
    let title = format!("bffctl service-account {}", action);
    let mut header = CommandHeader::new(Icon::Account, title);
    header.add("Account", email);
    header.render(ui.color, ui.unicode)
}

pub fn render_created(email: &str, outcome: CreateOutcome, ui: &UiContext) -> String {
    let message = match outcome {
        CreateOutcome::Created => format!("Service account created: {}", email),
        CreateOutcome::AlreadyExists => format!("Service account already exists: {}", email),
    };
    format!("{} {}\n", Icon::Success.colored(ui.color, ui.unicode), message)
}

pub fn render_deleted(email: &str, deleted: bool, ui: &UiContext) -> String {
    if deleted {
        format!(
            "{} Service account deleted: {}\n",
            Icon::Success.colored(ui.color, ui.unicode),
            email
        )
    } else {
        format!(
            "{} Could not delete service account: {}\n",
            Icon::Error.colored(ui.color, ui.unicode),
            email
        )
    }
}

/// `verb` is "Granted" or "Revoked"
pub fn render_roles(verb: &str, email: &str, roles: &RoleSet, ui: &UiContext) -> String {
    let mut out = format!(
        "{} {} {} role(s) for {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        verb,
        roles.len(),
        email
    );
    for role in roles.iter() {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(ui.color, ui.unicode),
            ColoredText::dim(role.as_str()).render(ui.color)
        ));
    }
    out
}
