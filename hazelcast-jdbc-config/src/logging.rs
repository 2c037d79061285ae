//! Logging setup for the Hazelcast JDBC driver.
//!
//! The library only emits `tracing` events. Applications that do not install
//! their own subscriber can call [`init`] (with the `tracing-subscriber`
//! feature enabled) to get one configured from the environment.
//!
//! # Environment Variables
//!
//! - `HZ_JDBC_DEBUG=true|1|yes` - Enable debug logging
//! - `HZ_JDBC_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `HZ_JDBC_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! ```rust,no_run
//! use hazelcast_jdbc_config::logging;
//!
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Variable enabling debug logging.
pub const DEBUG_ENV_VAR: &str = "HZ_JDBC_DEBUG";

/// Variable selecting the log level.
pub const LOG_LEVEL_ENV_VAR: &str = "HZ_JDBC_LOG_LEVEL";

/// Variable selecting the output format.
pub const LOG_FORMAT_ENV_VAR: &str = "HZ_JDBC_LOG_FORMAT";

/// Check if debug logging is enabled via `HZ_JDBC_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(DEBUG_ENV_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level.
///
/// Defaults to "debug" if `HZ_JDBC_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var(LOG_LEVEL_ENV_VAR) {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Get the configured log format. Defaults to "json".
pub fn get_log_format() -> &'static str {
    env::var(LOG_FORMAT_ENV_VAR)
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging. Subsequent calls are no-ops.
///
/// Nothing is installed unless `HZ_JDBC_DEBUG` or `HZ_JDBC_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var(LOG_LEVEL_ENV_VAR).is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "hazelcast_jdbc={},hazelcast_jdbc_config={},hzjdbc_cli={}",
                level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            // try_init: the host application may already own the global subscriber.
            let result = match get_log_format() {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .try_init(),
            };

            if result.is_ok() {
                tracing::info!(
                    level = level,
                    format = get_log_format(),
                    "Hazelcast JDBC logging initialized"
                );
            }
        }
    });
}
