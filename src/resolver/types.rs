// Current module imports
use super::errors::ResolveError;

/// Outcome of a single lookup attempt.
///
/// When `error` is set, `addresses` is empty.
#[derive(Debug, Default)]
pub struct LookupResult {
    /// Resolved addresses in resolver order
    pub addresses: Vec<String>,
    pub error: Option<ResolveError>,
}

/// Resolver backed by the operating system's name resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;
