use crate::constants;
use std::time::Duration;

/// Runtime tunables shared by the detector and the scanner.
///
/// Passed explicitly into constructors so tests can run with synthetic
/// timeouts and pool sizes instead of process-wide flag state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Per-request timeout applied to every HTTP call.
    pub timeout: Duration,
    /// Number of concurrent workers used by batch scans.
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            timeout: Duration::from_secs(constants::DEFAULT_HTTP_TIMEOUT),
            threads: constants::DEFAULT_WORKER_THREADS,
        }
    }
}
