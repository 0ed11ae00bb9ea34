//! Platform-specific locations for the config file and the log file.
//!
//! | Platform | Config file | Log file |
//! |----------|-------------|----------|
//! | Linux | `~/.config/erc20-indexer/config.json` | `~/.local/share/erc20-indexer/erc20-indexer.log` |
//! | macOS | `~/Library/Application Support/erc20-indexer/config.json` | same directory |
//! | Windows | `%APPDATA%/erc20-indexer/config.json` | `%APPDATA%/erc20-indexer/erc20-indexer.log` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "erc20-indexer";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "erc20-indexer.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories, creating them on first use.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        self.ensure(base)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        self.ensure(base)
    }

    /// Path to `config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or created.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }

    fn ensure(&self, mut base: PathBuf) -> Result<PathBuf> {
        base.push(&self.app_name);
        fs::create_dir_all(&base)?;
        Ok(base)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_live_under_app_dir() {
        let paths = AppPaths::new();
        if let (Ok(config), Ok(log)) = (paths.config_file(), paths.log_file()) {
            assert!(config.ends_with(format!("{APP_NAME}/{CONFIG_FILE_NAME}")));
            assert!(log.ends_with(format!("{APP_NAME}/{LOG_FILE_NAME}")));
        }
    }
}
