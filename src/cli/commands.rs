//! CLI command implementations

use serde_json::json;
use tokio::runtime::Runtime;
use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::{init_logging, Event, LogFormat};
use crate::store::AppointmentStore;

use super::args::{Command, ConnectionArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    init_logging(LogFormat::from_json_flag(cli.log_json));
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { connection } => init(&connection),
        Command::Serve { connection, port } => serve(&connection, port),
    }
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

fn load_config(connection: &ConnectionArgs, port: Option<u16>) -> CliResult<Config> {
    let config = Config::load_or_default(connection.config.as_deref())?
        .with_overrides(connection.database_url.clone(), port)?;
    info!(
        event = %Event::ConfigLoaded,
        database_url = %config.database()?,
        addr = %config.http.socket_addr(),
        "configuration loaded"
    );
    Ok(config)
}

/// Connect to the configured store and make sure the table exists
pub async fn open_store(config: &Config) -> CliResult<AppointmentStore> {
    let store = AppointmentStore::open(&config.database()?).await?;
    store.create_schema().await?;
    info!(event = %Event::SchemaReady, database_url = %store.url(), "appointment table ready");
    Ok(store)
}

/// Create the appointment table and exit
pub fn init(connection: &ConnectionArgs) -> CliResult<()> {
    let config = load_config(connection, None)?;
    runtime()?.block_on(open_store(&config))?;
    write_response(json!({"initialized": true}))
}

/// Create the table if needed, then serve HTTP until interrupted
pub fn serve(connection: &ConnectionArgs, port: Option<u16>) -> CliResult<()> {
    info!(event = %Event::BootStart, version = env!("CARGO_PKG_VERSION"), "starting");

    let config = load_config(connection, port)?;

    runtime()?.block_on(async {
        let store = open_store(&config).await?;
        let server = HttpServer::new(config.http.clone(), store);
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
