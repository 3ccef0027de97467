#![forbid(unsafe_code)]

//! Exit animation durations and policy-file loading.
//!
//! [`OverlayTimings`] declares how long each exit animation runs. The view
//! host plays them; the overlay only reacts to their completion events, so
//! these values decide which animation is terminal but never drive a timer
//! inside the overlay itself.
//!
//! # Policy files
//!
//! With the `policy-config` feature, timings load from TOML or JSON:
//!
//! ```toml
//! translate_out_ms = 300
//! fade_out_ms = 400
//! ```
//!
//! Missing keys keep their defaults. Unknown keys are rejected.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | Zero duration | `*_ms = 0` | [`ConfigError::ZeroDuration`] |
//! | Bad syntax / unknown key | Malformed file | [`ConfigError::Parse`] |
//! | Unreadable file | I/O | [`ConfigError::Io`] |

use std::time::Duration;

/// Default duration of the `translate-out` exit animation.
pub const DEFAULT_TRANSLATE_OUT: Duration = Duration::from_millis(300);

/// Default duration of the `fade-out` exit animation.
pub const DEFAULT_FADE_OUT: Duration = Duration::from_millis(400);

/// Errors from loading or validating overlay timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration was zero; the named field is reported.
    ZeroDuration(&'static str),
    /// The policy file could not be parsed.
    Parse(String),
    /// The policy file could not be read.
    Io { path: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDuration(field) => write!(f, "duration '{field}' must be non-zero"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Io { path, message } => write!(f, "cannot read '{path}': {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Declared durations of the two exit animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimings {
    pub translate_out: Duration,
    pub fade_out: Duration,
}

impl Default for OverlayTimings {
    fn default() -> Self {
        Self {
            translate_out: DEFAULT_TRANSLATE_OUT,
            fade_out: DEFAULT_FADE_OUT,
        }
    }
}

impl OverlayTimings {
    /// Set the translate-out duration.
    #[must_use]
    pub fn translate_out(mut self, duration: Duration) -> Self {
        self.translate_out = duration;
        self
    }

    /// Set the fade-out duration.
    #[must_use]
    pub fn fade_out(mut self, duration: Duration) -> Self {
        self.fade_out = duration;
        self
    }

    /// Check that both durations are non-zero.
    ///
    /// A zero-length animation may never emit a completion event in some
    /// view layers, which would leave an overlay stuck in `Closing`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.translate_out.is_zero() {
            return Err(ConfigError::ZeroDuration("translate_out_ms"));
        }
        if self.fade_out.is_zero() {
            return Err(ConfigError::ZeroDuration("fade_out_ms"));
        }
        Ok(())
    }
}

#[cfg(feature = "policy-config")]
mod policy {
    use super::{ConfigError, OverlayTimings};
    use serde::Deserialize;
    use std::path::Path;
    use std::time::Duration;

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct TimingsFile {
        translate_out_ms: Option<u64>,
        fade_out_ms: Option<u64>,
    }

    impl TimingsFile {
        fn resolve(self) -> Result<OverlayTimings, ConfigError> {
            let mut timings = OverlayTimings::default();
            if let Some(ms) = self.translate_out_ms {
                timings.translate_out = Duration::from_millis(ms);
            }
            if let Some(ms) = self.fade_out_ms {
                timings.fade_out = Duration::from_millis(ms);
            }
            timings.validate()?;
            Ok(timings)
        }
    }

    impl OverlayTimings {
        /// Parse timings from a TOML document.
        pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
            let file: TimingsFile =
                toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
            file.resolve()
        }

        /// Parse timings from a JSON document.
        pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
            let file: TimingsFile =
                serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
            file.resolve()
        }

        /// Load timings from a file. `.json` files are parsed as JSON,
        /// everything else as TOML.
        pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            #[cfg(feature = "tracing")]
            tracing::debug!(path = %path.display(), "loading overlay timings");

            match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json_str(&source),
                _ => Self::from_toml_str(&source),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_declared_durations() {
        let timings = OverlayTimings::default();
        assert_eq!(timings.translate_out, Duration::from_millis(300));
        assert_eq!(timings.fade_out, Duration::from_millis(400));
        assert!(timings.validate().is_ok());
    }

    #[test]
    fn zero_duration_rejected() {
        let timings = OverlayTimings::default().fade_out(Duration::ZERO);
        assert_eq!(
            timings.validate(),
            Err(ConfigError::ZeroDuration("fade_out_ms"))
        );
    }

    #[test]
    fn error_display() {
        let err = ConfigError::ZeroDuration("translate_out_ms");
        assert_eq!(err.to_string(), "duration 'translate_out_ms' must be non-zero");
    }

    #[cfg(feature = "policy-config")]
    mod policy_files {
        use super::*;

        #[test]
        fn toml_overrides_one_field() {
            let timings = OverlayTimings::from_toml_str("fade_out_ms = 650\n").unwrap();
            assert_eq!(timings.translate_out, DEFAULT_TRANSLATE_OUT);
            assert_eq!(timings.fade_out, Duration::from_millis(650));
        }

        #[test]
        fn json_overrides_both_fields() {
            let timings =
                OverlayTimings::from_json_str(r#"{"translate_out_ms": 120, "fade_out_ms": 90}"#)
                    .unwrap();
            assert_eq!(timings.translate_out, Duration::from_millis(120));
            assert_eq!(timings.fade_out, Duration::from_millis(90));
        }

        #[test]
        fn unknown_key_is_parse_error() {
            let err = OverlayTimings::from_toml_str("slide_ms = 10\n").unwrap_err();
            assert!(matches!(err, ConfigError::Parse(_)));
        }

        #[test]
        fn zero_in_file_rejected() {
            let err = OverlayTimings::from_toml_str("translate_out_ms = 0\n").unwrap_err();
            assert_eq!(err, ConfigError::ZeroDuration("translate_out_ms"));
        }

        #[test]
        fn missing_file_is_io_error() {
            let err = OverlayTimings::from_path("/nonexistent/scrim/timings.toml").unwrap_err();
            assert!(matches!(err, ConfigError::Io { .. }));
        }
    }
}
