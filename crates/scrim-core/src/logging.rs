#![forbid(unsafe_code)]

//! Structured logging setup.
//!
//! scrim crates emit `tracing` events; they never install a subscriber on
//! their own. Applications that want JSON lines can call [`init_json`]
//! (feature `tracing-json`). The filter is read from `SCRIM_LOG` and falls
//! back to [`DEFAULT_FILTER`].

/// Filter used when `SCRIM_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,scrim_widgets=debug";

/// Environment variable consulted for the log filter.
pub const FILTER_ENV: &str = "SCRIM_LOG";

/// Install a global JSON subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
}

#[cfg(all(test, feature = "tracing-json"))]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        // The first call may also fail if another test installed a subscriber.
        let _ = init_json();
        assert!(init_json().is_err());
    }
}
