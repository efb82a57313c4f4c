// Standard library
use std::io;
use std::time::Duration;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("lookup failed: {0}")]
    Lookup(#[from] io::Error),
}
