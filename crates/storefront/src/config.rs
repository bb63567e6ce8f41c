//! Store configuration read from the environment.
//!
//! # Environment Variables
//!
//! All variables are optional; a shop runs out of the box with defaults.
//!
//! - `ACEL_DATA_DIR` - Directory holding the shop's JSON documents
//!   (default: `data`)
//! - `ACEL_PRETTY_JSON` - Write documents as pretty-printed JSON
//!   (default: `true`)

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storage configuration for a shop.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the file store keeps its documents in.
    pub data_dir: PathBuf,
    /// Whether documents are written pretty-printed.
    pub pretty_json: bool,
}

impl StoreConfig {
    /// Read configuration from the environment, loading a `.env` file
    /// first when one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("ACEL_DATA_DIR", "data"));

        let pretty_raw = get_env_or_default("ACEL_PRETTY_JSON", "true");
        let pretty_json = parse_bool(&pretty_raw).ok_or_else(|| {
            ConfigError::InvalidEnvVar(
                "ACEL_PRETTY_JSON".to_string(),
                format!("expected a boolean, got '{pretty_raw}'"),
            )
        })?;

        Ok(Self {
            data_dir,
            pretty_json,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            pretty_json: true,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read an environment variable, falling back to a default.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a boolean environment value, accepting the usual spellings.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
