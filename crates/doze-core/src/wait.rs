//! The blocking wait.

use std::thread;
use std::time::Duration;

use tracing::debug;

/// Effective wait for a signed number of seconds.
///
/// Zero and negative requests map to `None`: there is nothing to wait for.
pub fn wait_duration(seconds: i64) -> Option<Duration> {
    u64::try_from(seconds)
        .ok()
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
}

/// Block the calling thread for the given number of seconds.
///
/// The wait is a plain `thread::sleep` on the current thread: no yielding,
/// no cancellation hook, no timeout. It runs to completion unless the
/// process is killed. Zero and negative requests return without sleeping.
pub fn pause(seconds: i64) {
    match wait_duration(seconds) {
        Some(wait) => {
            debug!("Pausing for {:?}", wait);
            thread::sleep(wait);
            debug!("Pause complete");
        }
        None => {
            debug!("Nothing to wait for ({} seconds requested)", seconds);
        }
    }
}
