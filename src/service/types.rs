// 3rd party crates
use serde::Deserialize;

/// Service manager used to stop and start services.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceManager {
    /// `net` on Windows, `systemctl` elsewhere
    #[default]
    Auto,
    /// Windows `net stop` / `net start`
    Net,
    /// systemd `systemctl stop` / `systemctl start`
    Systemctl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Stop,
    Start,
}

/// Controls services through the platform's service manager command.
#[derive(Debug, Clone)]
pub struct SystemServiceController {
    pub manager: ServiceManager,
}
