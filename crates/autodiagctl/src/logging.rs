//! Logging setup for autodiagctl
//!
//! Diagnostics go to stderr through tracing so the report on stdout stays
//! clean. Rule faults surface here as warnings.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter (e.g. `autodiag_shared=debug`)
pub const LOG_ENV: &str = "AUTODIAG_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive: `--verbose`, then `$AUTODIAG_LOG`, then warn
pub fn filter_directive(verbose: bool, env_value: Option<&str>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbose, env_value.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
