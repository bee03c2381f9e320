//! Logging setup for the command-line tool.
//!
//! The library only emits `tracing` events. The binary installs a
//! subscriber writing to stderr so stdout carries nothing but output.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn filter_from_config(config: &Config) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Install the global subscriber for the configured log level.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
