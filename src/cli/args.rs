//! CLI argument definitions using clap
//!
//! Commands:
//! - appointments init [--config <path>] [--database-url <url>]
//! - appointments serve [--config <path>] [--database-url <url>] [--port <n>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Notary appointment service
#[derive(Parser, Debug)]
#[command(name = "appointments")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where to find configuration and which database to use
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Connection string, overrides the config file
    #[arg(long, env = "APPOINTMENTS_DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the appointment table if it does not exist
    Init {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Create the table if needed and start the HTTP server
    Serve {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Port to listen on, overrides the config file
        #[arg(long, env = "APPOINTMENTS_PORT")]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
