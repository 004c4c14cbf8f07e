//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr. The filter comes from `RUST_LOG` and defaults to
//! [`DEFAULT_FILTER`]; file I/O failures are reported at `warn`, opens and
//! saves at `info`, message dispatch at `debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::error::AppError;

pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        // Whichever call runs first may succeed; a repeat never does
        let _ = init_logging();
        let err = init_logging().unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));
    }
}
