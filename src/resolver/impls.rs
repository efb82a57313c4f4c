// Standard library
use std::net::SocketAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::debug;

// Current module imports
use super::errors::ResolveError;
use super::traits::Resolver;
use super::types::{LookupResult, SystemResolver};

impl LookupResult {
    /// A successful lookup, keeping the first occurrence of each address.
    pub fn resolved<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for address in addresses.into_iter().map(Into::into) {
            if !unique.contains(&address) {
                unique.push(address);
            }
        }
        Self {
            addresses: unique,
            error: None,
        }
    }

    /// A failed lookup, which never carries addresses.
    pub fn failed(error: ResolveError) -> Self {
        Self {
            addresses: Vec::new(),
            error: Some(error),
        }
    }
}

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn lookup(&self, hostname: &str, timeout: Duration) -> LookupResult {
        debug!(hostname = %hostname, "Resolving with a {:?} timeout", timeout);

        // Port is irrelevant, only the address part is reported.
        match tokio::time::timeout(timeout, lookup_host((hostname, 0))).await {
            Ok(Ok(addrs)) => {
                LookupResult::resolved(addrs.map(|addr: SocketAddr| addr.ip().to_string()))
            }
            Ok(Err(e)) => LookupResult::failed(ResolveError::Lookup(e)),
            Err(_) => LookupResult::failed(ResolveError::Timeout(timeout)),
        }
    }
}
