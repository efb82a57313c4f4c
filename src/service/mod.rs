//! Service Controller
//!
//! Stops and starts a named operating system service. Each operation waits
//! for the underlying service manager to finish and reports failure as a
//! `ServiceError` instead of aborting.

pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::ServiceError;
pub use traits::ServiceController;
pub use types::{ServiceManager, SystemServiceController};
