//! CLI command dispatch
//!
//! `run` parses the arguments, installs the tracing subscriber, and
//! dispatches to the command implementations.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::catalog::{Order, Product};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::JsonFileStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { data_dir } => init(&data_dir),
        Command::Serve {
            port,
            host,
            data_dir,
        } => serve(port, host, data_dir),
    }
}

/// Create the data directory and empty collection files
pub fn init(data_dir: &Path) -> CliResult<()> {
    let config = HttpServerConfig::default().with_data_dir(data_dir);
    JsonFileStore::<Product>::new(config.products_path()).ensure_exists()?;
    JsonFileStore::<Order>::new(config.orders_path()).ensure_exists()?;
    tracing::info!(data_dir = %data_dir.display(), "data directory initialized");
    Ok(())
}

/// Boot the HTTP server and serve until interrupted
pub fn serve(port: Option<u16>, host: String, data_dir: std::path::PathBuf) -> CliResult<()> {
    let mut config = HttpServerConfig::from_env().with_data_dir(data_dir);
    config.host = host;
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config);
    tracing::info!(addr = %server.socket_addr(), "starting server");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}
