//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem with human-readable or JSON output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pick the default filter level from the flag and the configured level.
fn default_level<'a>(verbose: bool, configured: &'a str) -> &'a str {
    if verbose {
        "debug"
    } else {
        configured
    }
}

/// Initialize the logging subsystem.
///
/// - Log output goes to stderr (stdout is reserved for report lines)
/// - The RUST_LOG environment variable can override the log level
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging from the `[logging]` config section, with CLI overrides.
pub fn init_from_config(
    config: &hashname_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = default_level(verbose_override, &config.logging.level);
    let json_format = json_logs_override || config.logging.format == "json";
    init(level, json_format);
}
