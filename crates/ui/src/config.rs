//! Configuration Management for Trove
//!
//! Persistent client settings stored in the platform config directory:
//!
//! - macOS: ~/Library/Application Support/trove/config.toml
//! - Linux: ~/.config/trove/config.toml
//! - Windows: %APPDATA%\trove\config.toml
//!
//! A missing file is replaced with defaults on first launch so the file is
//! there to edit by hand.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use trove_core::{OrganizationId, TroveError, TroveResult};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the Trove backend
    pub api_base_url: String,
    /// Tenant every submission is attached to
    pub organization_id: OrganizationId,
    /// Tenant display name shown in the header
    pub organization_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            organization_id: uuid::Uuid::nil(),
            organization_name: "Default Workspace".to_string(),
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trove")
            .join("config.toml")
    }

    /// Load config from the platform location, creating the default file
    /// if it does not exist yet
    pub fn load() -> TroveResult<Self> {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> TroveResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .map_err(|e| TroveError::config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.save_to(path)?;
                Ok(config)
            }
            Err(e) => Err(TroveError::ConfigRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Save config to the platform location
    pub fn save(&self) -> TroveResult<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> TroveResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TroveError::ConfigWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TroveError::config(e.to_string()))?;
        fs::write(path, contents).map_err(|e| TroveError::ConfigWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Install this configuration as the process-wide instance read by the
    /// app state. Later calls are no-ops.
    pub fn install(self) {
        let _ = CONFIG.set(self);
    }

    /// The installed configuration, or defaults when none was installed
    pub fn global() -> AppConfig {
        CONFIG.get().cloned().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
