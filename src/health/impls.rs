// Standard library
use std::fmt;

// 3rd party crates
use tokio::time::sleep;
use tracing::{error, info, warn};

// Project imports
use crate::matcher::{classify, CheckOutcome};
use crate::resolver::{LookupResult, Resolver};
use crate::service::ServiceController;

// Current module imports
use super::errors::CheckError;
use super::types::{CheckConfig, HealthCheck, RemediationResult, RunOutcome, RunReport};

impl CheckError {
    /// Explains why a lookup did not match, or `None` if it did.
    pub fn from_lookup(result: LookupResult, hostname: &str, expected: &str) -> Option<Self> {
        match classify(&result, expected) {
            CheckOutcome::Matched => None,
            CheckOutcome::NoAddressesOrError => Some(match result.error {
                Some(source) => CheckError::Resolution {
                    hostname: hostname.to_string(),
                    source,
                },
                None => CheckError::ResolutionEmpty {
                    hostname: hostname.to_string(),
                },
            }),
            CheckOutcome::AddressMismatch => Some(CheckError::ResolutionMismatch {
                hostname: hostname.to_string(),
                addresses: result.addresses,
                expected: expected.to_string(),
            }),
        }
    }
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RunOutcome::Healthy | RunOutcome::Verified(CheckOutcome::Matched)
        )
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Healthy => write!(f, "healthy"),
            RunOutcome::StartFailed => write!(f, "service start failed"),
            RunOutcome::Verified(outcome) => write!(f, "verified after restart: {}", outcome),
        }
    }
}

#[derive(Clone, Copy)]
enum Phase {
    Initial,
    Verification,
}

impl<R, C> HealthCheck<R, C>
where
    R: Resolver,
    C: ServiceController,
{
    pub fn new(config: CheckConfig, resolver: R, controller: C) -> Self {
        Self {
            config,
            resolver,
            controller,
        }
    }

    /// Runs the check once, restarting the service at most once.
    pub async fn run(&self) -> RunReport {
        info!(
            hostname = %self.config.hostname,
            "Starting DNS check for {} (expecting {})",
            self.config.hostname, self.config.expected_address
        );

        let initial: CheckOutcome = self.check(Phase::Initial).await;
        let (remediation, outcome) = if initial.is_matched() {
            (None, RunOutcome::Healthy)
        } else {
            let remediation: RemediationResult = self.remediate().await;
            let outcome = match remediation.verify_outcome {
                Some(verified) => RunOutcome::Verified(verified),
                None => RunOutcome::StartFailed,
            };
            (Some(remediation), outcome)
        };

        if outcome.is_success() {
            info!(hostname = %self.config.hostname, "Check finished: {}", outcome);
        } else {
            warn!(hostname = %self.config.hostname, "Check finished: {}", outcome);
        }

        RunReport {
            initial,
            remediation,
            outcome,
        }
    }

    async fn check(&self, phase: Phase) -> CheckOutcome {
        let hostname: &str = &self.config.hostname;
        let expected: &str = &self.config.expected_address;

        let result: LookupResult = self
            .resolver
            .lookup(hostname, self.config.lookup_timeout)
            .await;
        let outcome: CheckOutcome = classify(&result, expected);

        if outcome.is_matched() {
            match phase {
                Phase::Initial => info!(
                    hostname = %hostname,
                    "DNS lookup successful for {}: {:?} (matches expected address)",
                    hostname, result.addresses
                ),
                Phase::Verification => info!(
                    hostname = %hostname,
                    "Verification SUCCESSFUL: DNS lookup now working correctly for {}: {:?}",
                    hostname, result.addresses
                ),
            }
        } else if let Some(err) = CheckError::from_lookup(result, hostname, expected) {
            match phase {
                Phase::Initial => warn!(hostname = %hostname, "{}", err),
                Phase::Verification => error!(hostname = %hostname, "Verification FAILED: {}", err),
            }
        }

        outcome
    }

    async fn remediate(&self) -> RemediationResult {
        let service: &str = &self.config.service_name;
        info!(service = %service, "Attempting to restart service: {}", service);

        // A failed stop does not prevent the start attempt.
        let stop_succeeded: bool = match self.controller.stop(service).await {
            Ok(()) => {
                info!(service = %service, "Service {} stopped successfully", service);
                true
            }
            Err(source) => {
                let err = CheckError::ServiceStop {
                    service: service.to_string(),
                    source,
                };
                error!(service = %service, "{}", err);
                false
            }
        };

        sleep(self.config.stop_delay).await;

        let start_succeeded: bool = match self.controller.start(service).await {
            Ok(()) => {
                info!(service = %service, "Service {} restarted successfully", service);
                true
            }
            Err(source) => {
                let err = CheckError::ServiceStart {
                    service: service.to_string(),
                    source,
                };
                error!(service = %service, "{}", err);
                false
            }
        };

        if !start_succeeded {
            return RemediationResult {
                stop_succeeded,
                start_succeeded,
                verify_outcome: None,
            };
        }

        info!(
            service = %service,
            "Waiting {:?} before verifying DNS resolution...",
            self.config.verify_delay
        );
        sleep(self.config.verify_delay).await;

        let verified: CheckOutcome = self.check(Phase::Verification).await;

        RemediationResult {
            stop_succeeded,
            start_succeeded,
            verify_outcome: Some(verified),
        }
    }
}
