// Standard library
use std::future::Future;
use std::io;
use std::time::Duration;

// 3rd party crates
use tokio::runtime::{Builder, Runtime};

/// How long shutdown waits for leftover blocking work, such as a system
/// lookup abandoned after its timeout.
pub const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

/// Runs `future` to completion on a single-threaded runtime.
///
/// Blocking tasks still running afterwards are given at most `shutdown`
/// before the runtime is torn down, so process exit is not held up by them.
pub fn block_on_bounded<F: Future>(future: F, shutdown: Duration) -> io::Result<F::Output> {
    let runtime: Runtime = Builder::new_current_thread().enable_all().build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_timeout(shutdown);
    Ok(output)
}
