//! Logging utilities for the GoBarber crates.
//!
//! Initializes a `tracing` subscriber with an env filter and provides a couple
//! of helpers used where a failure is recovered locally but should stay visible.

use gobarber_config::LoggingConfig;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate targets that receive the configured level.
const TARGETS: [&str; 3] = ["gobarber_common", "gobarber_config", "gobarber_scheduling"];

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use gobarber_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` still applies; the level is added on top for the GoBarber crates.
/// Calling this more than once is harmless: only the first call installs a subscriber.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in TARGETS {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize the tracing subscriber from the `[logging]` configuration section.
pub fn init_from_config(config: &LoggingConfig) {
    init_with_level(parse_level(&config.level));
}

/// Parses a configured level name (`"debug"`, `"warn"`, ...), falling back to INFO.
pub fn parse_level(name: &str) -> Level {
    name.parse().unwrap_or(Level::INFO)
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result, so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
