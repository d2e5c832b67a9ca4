use std::io;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive: explicit setting, then verbosity.
pub fn filter_directive(configured: Option<&str>, verbose: bool) -> &str {
    match configured {
        Some(directive) => directive,
        None if verbose => VERBOSE_FILTER,
        None => DEFAULT_FILTER,
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_logging(configured: Option<&str>, verbose: bool) {
    let directive = filter_directive(configured, verbose);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("gcp-onboard: ignoring invalid log filter '{directive}': {err}");
        EnvFilter::new(DEFAULT_FILTER)
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
