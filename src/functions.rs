// 3rd party crates
use tracing::{debug, info};

// Project imports
use crate::health::{CheckConfig, HealthCheck, RunReport};
use crate::resolver::SystemResolver;
use crate::service::SystemServiceController;
use crate::settings::Settings;

/// Runs one check cycle against the real resolver and service manager.
///
/// This function:
/// - Builds the immutable check configuration from the settings
/// - Resolves the host and compares it with the expected address
/// - Restarts the service once if the check fails
/// - Verifies resolution again after a successful restart
pub async fn run(settings: &Settings) -> RunReport {
    let config: CheckConfig = settings.to_check_config();
    let controller = SystemServiceController::new(settings.service.manager);

    debug!(
        service = %config.service_name,
        "Using '{}' to control services",
        controller.manager.program()
    );
    info!(
        "🕰️ Lookup timeout {:?}, stop delay {:?}, verify delay {:?}",
        config.lookup_timeout, config.stop_delay, config.verify_delay
    );

    let report: RunReport = HealthCheck::new(config, SystemResolver::new(), controller)
        .run()
        .await;
    log_summary(&report);
    report
}

fn log_summary(report: &RunReport) {
    match &report.remediation {
        None => info!("Summary: initial check {}, no restart needed", report.initial),
        Some(remediation) => {
            let verification: String = remediation
                .verify_outcome
                .map_or_else(|| "skipped".to_string(), |outcome| outcome.to_string());
            info!(
                "Summary: initial check {}, stop {}, start {}, verification {}",
                report.initial,
                succeeded(remediation.stop_succeeded),
                succeeded(remediation.start_succeeded),
                verification
            );
        }
    }
}

fn succeeded(ok: bool) -> &'static str {
    if ok {
        "succeeded"
    } else {
        "failed"
    }
}
