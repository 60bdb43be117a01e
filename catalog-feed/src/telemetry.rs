//! Logging setup and top-level error reporting.

use std::env;
use std::error::Error;

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Filtering follows `RUST_LOG` (default `info`); `LOG_FORMAT=json` switches
/// to JSON lines.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Log `err` and every error in its source chain.
pub fn report(context: &str, err: &dyn Error) {
    error!(error = %err, "{}", context);

    let mut source = err.source();
    while let Some(cause) = source {
        error!(cause = %cause, "Caused by");
        source = cause.source();
    }
}
