//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` if set, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// `json` switches to one JSON object per event.
pub fn init_tracing(default_level: &str, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
