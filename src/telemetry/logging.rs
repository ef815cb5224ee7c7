//! Structured logging setup
//!
//! Installs a `tracing-subscriber` registry. Filter priority: `RUST_LOG` env
//! var > the given level > "info". Debug builds log pretty text, release
//! builds log JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with the given default level
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging_with_level(level: &str) {
    let default_filter = format!("{},taskpilot={}", level, level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_target(false))
            .try_init()
            .ok();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
            .ok();
    }
}

/// Initialize logging at "info"
pub fn init_logging() {
    init_logging_with_level("info");
}
