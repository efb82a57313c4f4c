// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Host name to check must not be empty")]
    MissingHostname,
    #[error("Expected address must not be empty")]
    MissingExpectedAddress,
    #[error("Expected address '{0}' is not a valid IP address")]
    InvalidExpectedAddress(String),
    #[error("Expected address '{given}' is not in canonical form, use '{canonical}'")]
    NonCanonicalExpectedAddress { given: String, canonical: String },
    #[error("Service name must not be empty")]
    MissingServiceName,
    #[error("Lookup timeout must be greater than 0, got {0}")]
    InvalidLookupTimeout(u64),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
