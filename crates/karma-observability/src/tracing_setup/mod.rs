//! Tracing setup: `KARMA_LOG` filtering with JSON or human-readable output.

pub mod spans;

use tracing_subscriber::EnvFilter;

use karma_core::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "KARMA_LOG";

/// Initialize the global subscriber.
///
/// `KARMA_LOG` wins over the configured level. Returns false if a
/// subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> bool {
    install(EnvFilter::new(filter), json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}
