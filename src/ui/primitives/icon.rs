use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Init,
    Deploy,
    Clean,
    Status,
    History,
    Account,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Init) => theme::icons::INIT,
            (true, Icon::Deploy) => theme::icons::DEPLOY,
            (true, Icon::Clean) => theme::icons::CLEAN,
            (true, Icon::Status) => theme::icons::STATUS,
            (true, Icon::History) => theme::icons::HISTORY,
            (true, Icon::Account) => theme::icons::ACCOUNT,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Init) => theme::icons_ascii::INIT,
            (false, Icon::Deploy) => theme::icons_ascii::DEPLOY,
            (false, Icon::Clean) => theme::icons_ascii::CLEAN,
            (false, Icon::Status) => theme::icons_ascii::STATUS,
            (false, Icon::History) => theme::icons_ascii::HISTORY,
            (false, Icon::Account) => theme::icons_ascii::ACCOUNT,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Init
            | Icon::Deploy
            | Icon::Status
            | Icon::History
            | Icon::Account => theme::colors::INFO,
            Icon::Clean => theme::colors::WARNING,
        };
        format!("{}", s.with(color))
    }
}
