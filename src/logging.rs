use std::io;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub(crate) static LOG_ENV_VAR: &str = "LIFE_CALENDAR_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.  Only problems are
/// shown so that diagnostics don't get mixed into the normal console output.
static DEFAULT_FILTER: &str = "warn";

/// Install a global subscriber that writes diagnostics to stderr
pub(crate) fn init() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
