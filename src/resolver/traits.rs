// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::types::LookupResult;

/// Performs host name lookups bounded by a timeout.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolves `hostname`, waiting at most `timeout`.
    ///
    /// Each call is independent, so the same resolver can be used for the
    /// initial check and for verification.
    async fn lookup(&self, hostname: &str, timeout: Duration) -> LookupResult;
}
