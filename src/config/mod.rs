/// Configuration management for the grade form service
///
/// Handles server binding, document store selection and the collection name.

use crate::grade::DEFAULT_COLLECTION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Document store configuration
    pub store: StoreConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Which document store backs the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// SQLite file under `data_dir`
    Sqlite,
    /// Process-local, lost on restart
    Memory,
}

impl StoreKind {
    /// Parse a `GRADEFORM_STORE` value; unknown values fall back to SQLite
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => StoreKind::Memory,
            _ => StoreKind::Sqlite,
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub kind: StoreKind,
    /// Directory holding `grades.db` (default: "data")
    pub data_dir: String,
    /// Collection grade documents are appended to
    pub collection: String,
}

impl StoreConfig {
    /// Path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("grades.db")
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("GRADEFORM_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("GRADEFORM_PORT")
                    .unwrap_or_else(|_| "3005".to_string())
                    .parse()
                    .unwrap_or(3005),
            },
            store: StoreConfig {
                kind: std::env::var("GRADEFORM_STORE")
                    .map(|v| StoreKind::from_env_value(&v))
                    .unwrap_or(StoreKind::Sqlite),
                data_dir: std::env::var("GRADEFORM_DATA_DIR")
                    .unwrap_or_else(|_| "data".to_string()),
                collection: std::env::var("GRADEFORM_COLLECTION")
                    .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
            },
        }
    }
}
