//! Customer Registry - Main entry point
//!
//! Runs the interactive menu on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use customer_registry::{Config, CustomerService, JsonFileStore, Shell};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep the menu on stdout readable)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        data_file = %config.data_file.display(),
        autosave = config.autosave,
        "Starting customer registry"
    );

    let store = JsonFileStore::new(&config.data_file);
    let service = CustomerService::open(Box::new(store), config.autosave);

    let stdin = io::stdin();
    let shell = Shell::new(service, stdin.lock(), io::stdout());
    match shell.run() {
        Ok(registry) => {
            info!(count = registry.len(), "Customer registry shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Console I/O failed");
            Err(e.into())
        }
    }
}
