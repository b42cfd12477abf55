//! tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::GeneralConfig;

/// Install a stderr fmt subscriber filtered by `log_level` from the config.
///
/// An invalid directive falls back to `info`. Calling this twice is harmless:
/// the second subscriber is simply not installed.
pub fn init(config: &GeneralConfig) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
