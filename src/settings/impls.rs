// Standard library
use std::env;
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

// 3rd party crates
use config::{Config, ConfigError, Environment, File};

// Project imports
use crate::health::CheckConfig;
use crate::utility::log_sink::default_log_path;

// Current module imports
use super::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX};
use super::errors::{SettingsError, ValidationError};
use super::types::{ConfigLoad, ConfigManager, Settings, ValidatedSettings};

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    /// Location of the log file, either configured or next to the executable.
    pub fn get_log_file(&self) -> PathBuf {
        self.log.file.clone().unwrap_or_else(default_log_path)
    }

    pub fn is_strict_exit(&self) -> bool {
        self.check.strict_exit
    }

    /// Builds the immutable configuration handed to the health check.
    pub fn to_check_config(&self) -> CheckConfig {
        CheckConfig {
            hostname: self.check.hostname.trim().to_string(),
            expected_address: self.check.expected_address.trim().to_string(),
            service_name: self.service.name.trim().to_string(),
            lookup_timeout: Duration::from_secs(self.check.timeout),
            stop_delay: Duration::from_secs(self.remediation.stop_delay),
            verify_delay: Duration::from_secs(self.remediation.verify_delay),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        if self.check.hostname.trim().is_empty() {
            return Err(ValidationError::MissingHostname);
        }

        let expected: &str = self.check.expected_address.trim();
        if expected.is_empty() {
            return Err(ValidationError::MissingExpectedAddress);
        }

        // Matching is exact string equality against resolver output, so the
        // expected address has to be written the way the resolver prints it.
        let parsed: IpAddr = expected
            .parse()
            .map_err(|_| ValidationError::InvalidExpectedAddress(expected.to_string()))?;
        let canonical: String = parsed.to_string();
        if canonical != expected {
            return Err(ValidationError::NonCanonicalExpectedAddress {
                given: expected.to_string(),
                canonical,
            });
        }

        if self.service.name.trim().is_empty() {
            return Err(ValidationError::MissingServiceName);
        }

        if self.check.timeout == 0 {
            return Err(ValidationError::InvalidLookupTimeout(self.check.timeout));
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Locates the configuration file, writing the default one if it is
    /// missing, then loads and validates it.
    pub fn load() -> ConfigLoad {
        let config_path: PathBuf = match Self::get_config_path() {
            Ok(path) => path,
            Err(e) => {
                return ConfigLoad {
                    created_default: None,
                    manager: Err(e.into()),
                }
            }
        };

        let created_default: Option<PathBuf> = match Self::ensure_config_file_exists(&config_path)
        {
            Ok(true) => Some(config_path.clone()),
            Ok(false) => None,
            Err(e) => {
                return ConfigLoad {
                    created_default: None,
                    manager: Err(e.into()),
                }
            }
        };

        ConfigLoad {
            created_default,
            manager: Self::from_path(config_path),
        }
    }

    /// Loads and validates the configuration stored at `config_path`.
    pub fn from_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        let settings: Settings = Self::load_settings(&config_path)?;
        let validated_settings = ValidatedSettings::new(settings)?;

        Ok(ConfigManager {
            settings: validated_settings.into_inner(),
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("nsrestart").join("config.toml"))
        } else {
            Err(ConfigError::Message(
                "Could not determine the configuration directory".into(),
            ))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    ///
    /// Returns `true` when the default file was written.
    fn ensure_config_file_exists(config_path: &Path) -> Result<bool, ConfigError> {
        if config_path.exists() {
            return Ok(false);
        }
        if let Some(parent_dir) = config_path.parent() {
            fs::create_dir_all(parent_dir).map_err(|e| {
                ConfigError::Message(format!("Failed to create configuration directory: {}", e))
            })?;
        }
        fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
            ConfigError::Message(format!("Failed to create default configuration file: {}", e))
        })?;
        Ok(true)
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            ConfigError::Message("Configuration file path contains invalid UTF-8 characters".into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;
    use crate::service::ServiceManager;

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("settings should deserialize")
    }

    fn minimal() -> Settings {
        parse(
            r#"
            [check]
            hostname = "ns.example.com"
            expected_address = "10.1.2.3"

            [service]
            name = "named"
            "#,
        )
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "nsrestart-settings-{}-{}",
            std::process::id(),
            name
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_config_requires_target() {
        let settings = parse(DEFAULT_CONFIG);
        assert!(settings.check.hostname.is_empty());
        assert!(settings.check.expected_address.is_empty());
        assert!(settings.service.name.is_empty());
        assert_eq!(settings.service.manager, ServiceManager::Auto);
        assert_eq!(settings.check.timeout, 5);
        assert!(!settings.check.strict_exit);
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::MissingHostname)
        ));
    }

    #[test]
    fn test_freshly_written_config_is_rejected() {
        let dir = scratch_dir("fresh");
        let path = dir.join("nested").join("config.toml");

        assert!(ConfigManager::ensure_config_file_exists(&path).unwrap());
        assert!(path.exists());
        // An existing file is left alone.
        assert!(!ConfigManager::ensure_config_file_exists(&path).unwrap());

        assert!(matches!(
            ConfigManager::from_path(path),
            Err(SettingsError::Validation(ValidationError::MissingHostname))
        ));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_sections_fail_validation() {
        let settings = parse("[log]\nlevel = \"debug\"\n");
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::MissingHostname)
        ));
    }

    #[test]
    fn test_defaults_applied() {
        let settings = minimal();
        assert_eq!(settings.get_log_level(), "info");
        assert!(settings.log.file.is_none());
        assert_eq!(settings.check.timeout, 5);
        assert_eq!(settings.remediation.stop_delay, 2);
        assert_eq!(settings.remediation.verify_delay, 15);

        let config = settings.to_check_config();
        assert_eq!(config.hostname, "ns.example.com");
        assert_eq!(config.expected_address, "10.1.2.3");
        assert_eq!(config.service_name, "named");
        assert_eq!(config.lookup_timeout, Duration::from_secs(5));
        assert_eq!(config.stop_delay, Duration::from_secs(2));
        assert_eq!(config.verify_delay, Duration::from_secs(15));
    }

    #[test]
    fn test_configured_log_file_is_used() {
        let mut settings = minimal();
        settings.log.file = Some(PathBuf::from("/tmp/custom.log"));
        assert_eq!(settings.get_log_file(), PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = minimal();
        settings.log.level = "verbose".into();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let mut settings = minimal();
        settings.check.hostname = "  ".into();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::MissingHostname)
        ));

        let mut settings = minimal();
        settings.check.expected_address = String::new();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::MissingExpectedAddress)
        ));

        let mut settings = minimal();
        settings.service.name = String::new();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::MissingServiceName)
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut settings = minimal();
        settings.check.timeout = 0;
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidLookupTimeout(0))
        ));
    }

    #[test]
    fn test_zero_delays_allowed() {
        let mut settings = minimal();
        settings.remediation.stop_delay = 0;
        settings.remediation.verify_delay = 0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_expected_address_must_be_canonical_ip() {
        let mut settings = minimal();
        settings.check.expected_address = "not-an-ip".into();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidExpectedAddress(_))
        ));

        settings.check.expected_address = "2001:DB8::0001".into();
        match settings.validate() {
            Err(ValidationError::NonCanonicalExpectedAddress { canonical, .. }) => {
                assert_eq!(canonical, "2001:db8::1");
            }
            other => panic!("unexpected validation result: {:?}", other),
        }

        settings.check.expected_address = "2001:db8::1".into();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_path_loads_file() {
        let dir = scratch_dir("load");
        let path = dir.join("config.toml");
        let contents = DEFAULT_CONFIG
            .replace("# hostname =", "hostname =")
            .replace("# expected_address =", "expected_address =")
            .replace("# name =", "name =");
        fs::write(&path, contents).unwrap();

        let manager = ConfigManager::from_path(path.clone()).expect("config should load");
        assert_eq!(manager.get_settings().check.hostname, "hostname.example.com");
        assert_eq!(manager.get_settings().check.expected_address, "192.168.1.1");
        assert_eq!(manager.get_settings().service.name, "DnsService");
        assert_eq!(manager.config_path, path);

        fs::remove_dir_all(&dir).ok();
    }
}
