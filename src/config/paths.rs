//! Path management for fincalc
//!
//! Provides XDG-compliant path resolution for the settings file, the
//! calculation history log and exported results.
//!
//! ## Path Resolution Order
//!
//! 1. `FINCALC_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fincalc` or `~/.config/fincalc`
//! 3. Windows: `%APPDATA%\fincalc`

use std::path::PathBuf;

use crate::error::FincalcError;

/// Manages all paths used by fincalc
#[derive(Debug, Clone)]
pub struct FincalcPaths {
    /// Base directory for all fincalc files
    base_dir: PathBuf,
}

impl FincalcPaths {
    /// Create a new FincalcPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FincalcError> {
        let base_dir = if let Ok(custom) = std::env::var("FINCALC_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FincalcPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fincalc/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory exported results are written to by default
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the calculation history log
    pub fn history_log(&self) -> PathBuf {
        self.base_dir.join("history.log")
    }

    /// Ensure the base and exports directories exist
    pub fn ensure_directories(&self) -> Result<(), FincalcError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FincalcError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| FincalcError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }

    /// Check if fincalc has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FincalcError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FincalcError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("fincalc"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FincalcError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FincalcError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fincalc"))
}
