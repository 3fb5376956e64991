//! HTTP Server Configuration
//!
//! Host, port, CORS origins, and the directory holding the per-resource
//! data files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means allow any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory holding products.json and orders.json (default: "./data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            data_dir: default_data_dir(),
        }
    }
}

impl HttpServerConfig {
    /// Default configuration with the port overridden by the `PORT`
    /// environment variable when set and valid.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        config
    }

    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the product collection file
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    /// Path of the order collection file
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join("orders.json")
    }
}
