/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"
# Optional: log file path. Defaults to "nsrestart.log" next to the executable.
# file = "/var/log/nsrestart.log"

# Name resolution check
[check]
# Required: host name to resolve
# hostname = "hostname.example.com"
# Required: address the host name is expected to resolve to (canonical form)
# expected_address = "192.168.1.1"
# Lookup timeout in seconds, used for both the initial and verification lookups
timeout = 5
# Exit with a non-zero status when the check (or its remediation) fails
strict_exit = false

# Service restarted when the check fails
[service]
# Required: name of the service to restart
# name = "DnsService"
# Service manager: "auto", "net" (Windows) or "systemctl"
manager = "auto"

# Remediation timing in seconds
[remediation]
# Wait after stopping the service
stop_delay = 2
# Wait after starting the service before verifying resolution
verify_delay = 15
"#;

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "NSRESTART_CONFIG_PATH";

/// Prefix for environment variable overrides, e.g. `NSRESTART__CHECK__HOSTNAME`
pub const ENV_PREFIX: &str = "NSRESTART";

/// Log file name used when no explicit path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "nsrestart.log";

pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_STOP_DELAY_SECS: u64 = 2;
pub const DEFAULT_VERIFY_DELAY_SECS: u64 = 15;

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_lookup_timeout() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT_SECS
}

pub fn default_stop_delay() -> u64 {
    DEFAULT_STOP_DELAY_SECS
}

pub fn default_verify_delay() -> u64 {
    DEFAULT_VERIFY_DELAY_SECS
}
