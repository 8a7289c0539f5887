//! JSON file implementation of [`CustomerStore`].

use crate::error::{StoreError, StoreResult};
use crate::models::Customer;
use crate::registry::RegistryState;
use crate::repositories::CustomerStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current on-disk format version.
pub const STORE_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    customers: &'a [Customer],
}

// Customers stay undecoded until the version is known. `saved_at` is ignored.
#[derive(Deserialize)]
struct StoreDocument {
    version: u32,
    customers: serde_json::Value,
}

/// Stores the registry as one pretty-printed JSON document.
///
/// Saves write a sibling temp file, sync it, then rename it over the target so
/// an interrupted save never leaves a half-written store behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn decode(&self, raw: &str) -> StoreResult<RegistryState> {
        let document: StoreDocument = serde_json::from_str(raw)?;
        if document.version != STORE_VERSION {
            return Err(StoreError::UnsupportedVersion(document.version));
        }

        let customers: Vec<Customer> = serde_json::from_value(document.customers)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let mut seen = HashSet::with_capacity(customers.len());
        for customer in &customers {
            if !seen.insert(customer.phone.as_str()) {
                return Err(StoreError::Corrupt(format!(
                    "duplicate phone number {}",
                    customer.phone
                )));
            }
        }

        Ok(RegistryState::new(customers))
    }

    fn write_temp(&self, tmp_path: &Path, state: &RegistryState) -> StoreResult<()> {
        let file = File::create(tmp_path).map_err(|e| StoreError::io(tmp_path, e))?;
        let mut writer = BufWriter::new(file);

        let document = StoreDocumentRef {
            version: STORE_VERSION,
            saved_at: Utc::now(),
            customers: state.customers(),
        };
        serde_json::to_writer_pretty(&mut writer, &document)
            .map_err(|e| encode_error(tmp_path, e))?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| StoreError::io(tmp_path, e))?;

        let file = writer
            .into_inner()
            .map_err(|e| StoreError::io(tmp_path, e.into_error()))?;
        file.sync_all().map_err(|e| StoreError::io(tmp_path, e))
    }
}

/// Failed writes while encoding are I/O errors on `path`, not encoding errors.
fn encode_error(path: &Path, err: serde_json::Error) -> StoreError {
    if err.is_io() {
        StoreError::io(path, err.into())
    } else {
        StoreError::Serialization(err)
    }
}

impl CustomerStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<RegistryState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No customer store on disk");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let state = self.decode(&raw)?;
        info!(
            path = %self.path.display(),
            count = state.len(),
            "Loaded customer store"
        );
        Ok(Some(state))
    }

    fn save(&self, state: &RegistryState) -> StoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }

        let tmp_path = self.temp_path();
        if let Err(e) = self.write_temp(&tmp_path, state) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::io(&self.path, e));
        }

        info!(
            path = %self.path.display(),
            count = state.len(),
            "Saved customer store"
        );
        Ok(())
    }
}
