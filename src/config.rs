use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{EntropyError, Result};

/// Run configuration for the entropy screener
///
/// The SAFE/UNSAFE threshold is fixed and deliberately absent here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Emit `ERROR|File not found: <path>` instead of staying silent
    #[serde(default = "default_report_not_found")]
    pub report_not_found: bool,

    /// Log level for stderr diagnostics (off unless set here or via RUST_LOG)
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_report_not_found() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_not_found: default_report_not_found(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EntropyError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| EntropyError::ConfigLoad {
            source: e,
            path: path.to_path_buf(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            LevelFilter::from_str(level).map_err(|_| {
                EntropyError::Config(format!(
                    "log_level '{}' is not one of off, error, warn, info, debug, trace",
                    level
                ))
            })?;
        }

        Ok(())
    }

    /// Configured log level, if any
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level).ok())
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            EntropyError::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content)?;

        Ok(())
    }
}
