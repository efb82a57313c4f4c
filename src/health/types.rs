// Standard library
use std::time::Duration;

// Project imports
use crate::matcher::CheckOutcome;

/// Immutable configuration of a check cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub hostname: String,
    pub expected_address: String,
    pub service_name: String,
    /// Bound on each lookup, initial and verification alike
    pub lookup_timeout: Duration,
    /// Wait after stopping the service
    pub stop_delay: Duration,
    /// Wait after starting the service before verifying
    pub verify_delay: Duration,
}

/// What happened during the single remediation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemediationResult {
    pub stop_succeeded: bool,
    pub start_succeeded: bool,
    /// Only present when the service started
    pub verify_outcome: Option<CheckOutcome>,
}

/// Terminal state of a check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The initial check matched, nothing was restarted
    Healthy,
    /// The service could not be started, verification was skipped
    StartFailed,
    /// Outcome of the verification lookup after a restart
    Verified(CheckOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub initial: CheckOutcome,
    pub remediation: Option<RemediationResult>,
    pub outcome: RunOutcome,
}

/// Drives one check-remediate-verify cycle.
pub struct HealthCheck<R, C> {
    pub(super) config: CheckConfig,
    pub(super) resolver: R,
    pub(super) controller: C,
}
