//! Orchestrator configuration.

use crate::error::{SyncError, SyncResult};
use platsync_types::Tolerances;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured store path.
pub const STORE_PATH_ENV: &str = "PLATSYNC_STORE";

/// Default master store file name, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "platsync-master.json";

/// Configuration for the sync orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Path of the shared master store.
    pub store_path: PathBuf,
    /// Numeric tolerances for registration and filtering.
    pub tolerances: Tolerances,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            tolerances: Tolerances::default(),
        }
    }
}

impl SyncConfig {
    /// Parses a JSON config document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> SyncResult<Self> {
        serde_json::from_str(json).map_err(|e| SyncError::Config(format!("invalid config: {e}")))
    }

    /// Loads a JSON config file.
    pub fn from_json_file(path: &Path) -> SyncResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Applies `PLATSYNC_STORE` if it is set and non-empty.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var_os(STORE_PATH_ENV) {
            Some(path) if !path.is_empty() => self.with_store_path(path),
            _ => self,
        }
    }

    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }
}
