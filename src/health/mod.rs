//! Health-Check Orchestrator
//!
//! Runs one check cycle: resolve the host, compare against the expected
//! address and, when that fails, restart the service once and verify the
//! resolution again. The cycle is linear and always runs to completion;
//! every failure along the way is logged and folded into the `RunReport`.
//!
//! ```text
//! Init -> InitialCheck -> Done(Matched)
//!                      -> Stopping -> Starting -> Done(StartFailed)
//!                                              -> Verifying -> Done(outcome)
//! ```

pub mod errors;
pub mod impls;
pub mod types;

pub use types::{CheckConfig, HealthCheck, RunReport};
