//! Resolver Client
//!
//! Bounded-time host name to address lookups. A lookup never fails outright:
//! timeouts and resolver errors are folded into the returned `LookupResult`
//! with an empty address list, so callers can classify every attempt the
//! same way.

pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::ResolveError;
pub use traits::Resolver;
pub use types::{LookupResult, SystemResolver};
