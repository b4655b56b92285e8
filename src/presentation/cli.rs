//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--color, --verbose, --project-dir) are inherited by all subcommands
//! - `status -v` reuses the global verbosity flag to include recent operations

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// bffctl - scaffold, deploy and tear down bff-template projects
#[derive(Parser, Debug)]
#[command(name = "bffctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory (default: discovered from the working directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the local project from the template
    Init {
        /// Skip `npm run build` for the frontend
        #[arg(long)]
        skip_frontend_build: bool,
    },

    /// Build, publish and deploy the project
    Deploy {
        /// Region for the compute service (default from config)
        #[arg(long)]
        region: Option<String>,
    },

    /// Delete every created resource and reset the project
    Clean {
        /// Keep the local tree and only reset the ledger
        #[arg(long)]
        skip_local: bool,
    },

    /// Show lifecycle flags and configuration (-v adds recent operations)
    Status,

    /// Show the operation history
    History {
        /// Show only the last N operations (0 shows all)
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Print details as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read or write ledger configuration values
    Config(ConfigArgs),

    /// Manage the project's service account
    ServiceAccount {
        #[command(subcommand)]
        action: ServiceAccountAction,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ConfigArgs {
    /// Print the value of KEY
    #[arg(long, value_name = "KEY")]
    pub get: Option<String>,

    /// Store VALUE under KEY
    #[arg(long, value_name = "KEY=VALUE")]
    pub set: Option<String>,

    /// Print every configuration entry
    #[arg(long)]
    pub list: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ServiceAccountAction {
    /// Create the service account if it does not exist
    Create,

    /// Delete the service account
    Delete,

    /// Grant roles (default: the deploy role set)
    AddPermissions {
        /// Roles to grant instead of the defaults
        #[arg(long, num_args = 1..)]
        roles: Option<Vec<String>>,
    },

    /// Revoke roles (default: the cleanup role set)
    RemovePermissions {
        /// Roles to revoke instead of the defaults
        #[arg(long, num_args = 1..)]
        roles: Option<Vec<String>>,
    },
}

impl ServiceAccountAction {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ServiceAccountAction::Create => "create",
            ServiceAccountAction::Delete => "delete",
            ServiceAccountAction::AddPermissions { .. } => "add-permissions",
            ServiceAccountAction::RemovePermissions { .. } => "remove-permissions",
        }
    }
}
