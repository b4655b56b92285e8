//! bffctl - lifecycle manager for bff-template projects
//!
//! Usage: bffctl [-C <DIR>] <COMMAND>
//!
//! Commands:
//!   init             Scaffold the project and its local environment
//!   deploy           Build, push and deploy to Cloud Run
//!   clean            Tear down every created resource
//!   status           Show the project state ledger
//!   history          Show recorded operations
//!   config           Read or write project configuration values
//!   service-account  Manage the deployment service account

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bffctl::infrastructure::InterruptFlag;
use bffctl::presentation::{Cli, Commands, Workspace};
use bffctl::Config;

use crate::ui::context::UiContext;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    init_tracing(cli.verbose);

    let interrupt = InterruptFlag::new();
    let handler_flag = interrupt.clone();
    if let Err(err) = ctrlc::set_handler(move || {
        // a running child or workflow step notices the flag and unwinds
        if !handler_flag.request() {
            println!("\n{}", crate::ui::error::INTERRUPTED_MESSAGE);
            std::process::exit(130);
        }
    }) {
        tracing::warn!("could not install Ctrl+C handler: {err}");
    }

    let mut ui = UiContext::new(cli.verbose, cli.color, &Config::default());
    if let Err(err) = run(cli, interrupt, &mut ui) {
        crate::ui::error::print_error(&err, &ui);
        std::process::exit(crate::ui::error::exit_code(&err));
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("BFFCTL_LOG").unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("bffctl={level}"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli, interrupt: InterruptFlag, ui: &mut UiContext) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let ws = Workspace::open(cli.project_dir.as_deref(), &cwd, interrupt)?;

    *ui = UiContext::new(cli.verbose, cli.color, &ws.config);
    crate::ui::output::print_config_warnings(&ws.warnings, ui);

    match cli.command {
        Commands::Init {
            skip_frontend_build,
        } => commands::init::cmd_init(&ws, ui, skip_frontend_build),
        Commands::Deploy { region } => commands::deploy::cmd_deploy(&ws, ui, region),
        Commands::Clean { skip_local } => commands::clean::cmd_clean(&ws, ui, skip_local),
        Commands::Status => commands::status::cmd_status(&ws, ui),
        Commands::History { limit, json } => commands::history::cmd_history(&ws, ui, limit, json),
        Commands::Config(args) => commands::config::cmd_config(&ws, ui, args),
        Commands::ServiceAccount { action } => {
            commands::service_account::cmd_service_account(&ws, ui, action)
        }
    }
}
