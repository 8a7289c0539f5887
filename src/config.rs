//! Configuration management for the customer registry.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which belongs to the interactive menu.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the persisted store, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "customers.json";

/// Configuration for the customer registry.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON store (default: "customers.json")
    pub data_file: PathBuf,

    /// Save after every successful mutation (default: true)
    pub autosave: bool,

    /// Log filter used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CUSTOMER_DATA_FILE`: Path of the store (default: customers.json)
    /// - `CUSTOMER_AUTOSAVE`: Save after each change (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CUSTOMER_DATA_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CUSTOMER_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let autosave = Self::parse_env_bool("CUSTOMER_AUTOSAVE", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_file,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autosave: true,
            log_level: "warn".to_string(),
        }
    }
}
