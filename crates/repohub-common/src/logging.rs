//! Tracing initialization shared by every binary

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used as the filter.
/// Calling this twice is harmless: the second install is ignored.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Format an error with its cause chain
pub fn format_error(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(" Caused by: ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
