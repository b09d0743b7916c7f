//! Tracing setup.
//!
//! Call once at process start. The filter comes from `RUST_LOG` when set,
//! falling back to the configured directive. Production gets JSON lines,
//! development gets the human-readable format.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Returns an error when a subscriber is already installed, which happens
/// when tests initialize logging more than once; callers may ignore it.
pub fn init_tracing(default_filter: &str, json: bool) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = if json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_fails_cleanly() {
        let _ = init_tracing("info", false);
        assert!(init_tracing("info", false).is_err());
    }
}
