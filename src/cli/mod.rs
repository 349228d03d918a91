//! CLI module for the appointment service
//!
//! Provides command-line interface for:
//! - init: Create the appointment table
//! - serve: Create the table if needed and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, ConnectionArgs};
pub use commands::{init, open_store, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
