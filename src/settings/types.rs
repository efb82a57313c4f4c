// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::service::ServiceManager;

// Current module imports
use super::constants::{
    default_log_level, default_lookup_timeout, default_stop_delay, default_verify_delay,
};
use super::errors::SettingsError;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; `None` places the log next to the executable
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Check {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub expected_address: String,
    /// Lookup timeout in seconds
    #[serde(default = "default_lookup_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub strict_exit: bool,
}

impl Default for Check {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            expected_address: String::new(),
            timeout: default_lookup_timeout(),
            strict_exit: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Service {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manager: ServiceManager,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Remediation {
    /// Seconds to wait after stopping the service
    #[serde(default = "default_stop_delay")]
    pub stop_delay: u64,
    /// Seconds to wait after starting the service before verifying
    #[serde(default = "default_verify_delay")]
    pub verify_delay: u64,
}

impl Default for Remediation {
    fn default() -> Self {
        Self {
            stop_delay: default_stop_delay(),
            verify_delay: default_verify_delay(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub check: Check,
    #[serde(default)]
    pub service: Service,
    #[serde(default)]
    pub remediation: Remediation,
}

/// Settings that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);

/// Loads the application settings once at startup.
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}

/// Result of locating, creating and loading the configuration file.
///
/// Produced before logging is set up, so the caller reports it afterwards.
pub struct ConfigLoad {
    /// Set when a default configuration file was written on this run
    pub created_default: Option<PathBuf>,
    pub manager: Result<ConfigManager, SettingsError>,
}
