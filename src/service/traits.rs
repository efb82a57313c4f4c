// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::ServiceError;

/// Stops and starts named services.
///
/// Both operations complete before returning.
#[async_trait]
pub trait ServiceController: Send + Sync {
    async fn stop(&self, service_name: &str) -> Result<(), ServiceError>;

    async fn start(&self, service_name: &str) -> Result<(), ServiceError>;
}
