//! CLI argument definitions using clap
//!
//! Commands:
//! - stockroom init --data-dir <path>
//! - stockroom serve --port <port> --data-dir <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stockroom - A flat-file product and order CRUD HTTP API
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory with empty collection files
    Init {
        /// Directory holding the JSON collection files
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Port to bind to; overrides the PORT environment variable
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Directory holding the JSON collection files
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
