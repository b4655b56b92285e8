//! Config command handler

use anyhow::Result;

use bffctl::application::inspect;
use bffctl::domain::ports::LedgerStore;
use bffctl::presentation::{ConfigArgs, Workspace};
use bffctl::ManagerError;

use crate::ui::context::UiContext;
use crate::ui::views::config::{render_config_list, render_config_set};

pub fn cmd_config(ws: &Workspace, ui: &UiContext, args: ConfigArgs) -> Result<()> {
    if let Some(key) = args.get {
        match inspect::get_config(&ws.ledger, &key)? {
            Some(value) => println!("{}", inspect::render_value(&value)),
            None => return Err(ManagerError::ConfigKeyNotFound { key }.into()),
        }
    } else if let Some(raw) = args.set {
        let (key, value) = inspect::set_config(&ws.ledger, &raw)?;
        print!("{}", render_config_set(&key, &value, ui));
    } else {
        let ledger = ws.ledger.read_all().map_err(ManagerError::from)?;
        let entries: Vec<_> = ledger
            .config()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        print!("{}", render_config_list(&entries, ui));
    }
    Ok(())
}
