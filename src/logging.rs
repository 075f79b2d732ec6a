use std::env;
use std::io;
use tracing::Level;

pub const LOG_ENV: &str = "SHAPES_LOG";

pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Installs a stderr subscriber. Stdout is left to the demo output.
///
/// The level comes from `SHAPES_LOG`, defaulting to `warn`. Calling this
/// twice is harmless; the second install is ignored.
pub fn init() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(Level::WARN);

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
