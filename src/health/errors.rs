// 3rd party crates
use thiserror::Error;

// Project imports
use crate::resolver::ResolveError;
use crate::service::ServiceError;

/// Failures observed during a check cycle. None of them abort the run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("DNS lookup failed for {hostname}: {source}")]
    Resolution {
        hostname: String,
        #[source]
        source: ResolveError,
    },

    #[error("DNS lookup returned no addresses for {hostname}")]
    ResolutionEmpty { hostname: String },

    #[error("DNS lookup returned unexpected address(es) for {hostname}: {addresses:?} (expected: {expected})")]
    ResolutionMismatch {
        hostname: String,
        addresses: Vec<String>,
        expected: String,
    },

    #[error("Failed to stop service {service}: {source}")]
    ServiceStop {
        service: String,
        #[source]
        source: ServiceError,
    },

    #[error("Failed to start service {service}: {source}")]
    ServiceStart {
        service: String,
        #[source]
        source: ServiceError,
    },
}
