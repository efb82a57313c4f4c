// Standard library
use std::process::Output;

// 3rd party crates
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

// Current module imports
use super::errors::ServiceError;
use super::traits::ServiceController;
use super::types::{ServiceAction, ServiceManager, SystemServiceController};

impl ServiceManager {
    /// Resolves `Auto` to the manager of the current platform.
    pub fn resolve(self) -> ServiceManager {
        match self {
            ServiceManager::Auto if cfg!(windows) => ServiceManager::Net,
            ServiceManager::Auto => ServiceManager::Systemctl,
            other => other,
        }
    }

    pub fn program(&self) -> &'static str {
        match self.resolve() {
            ServiceManager::Net => "net",
            _ => "systemctl",
        }
    }
}

impl ServiceAction {
    pub fn verb(&self) -> &'static str {
        match self {
            ServiceAction::Stop => "stop",
            ServiceAction::Start => "start",
        }
    }
}

impl SystemServiceController {
    pub fn new(manager: ServiceManager) -> Self {
        Self {
            manager: manager.resolve(),
        }
    }

    /// Command line for `action` on `service_name`, as program and arguments.
    pub fn command_line(&self, action: ServiceAction, service_name: &str) -> (&'static str, [String; 2]) {
        (
            self.manager.program(),
            [action.verb().to_string(), service_name.to_string()],
        )
    }

    async fn run(&self, action: ServiceAction, service_name: &str) -> Result<(), ServiceError> {
        let (program, args) = self.command_line(action, service_name);
        let command: String = format!("{} {}", program, args.join(" "));
        debug!(service = %service_name, "Running '{}'", command);

        let output: Output = Command::new(program)
            .args(&args)
            .output()
            .await
            .map_err(|source| ServiceError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ServiceError::Failed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl ServiceController for SystemServiceController {
    async fn stop(&self, service_name: &str) -> Result<(), ServiceError> {
        self.run(ServiceAction::Stop, service_name).await
    }

    async fn start(&self, service_name: &str) -> Result<(), ServiceError> {
        self.run(ServiceAction::Start, service_name).await
    }
}
