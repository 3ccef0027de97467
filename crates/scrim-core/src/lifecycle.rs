#![forbid(unsafe_code)]

//! Overlay lifecycle phases.
//!
//! Every overlay (stacked dialog or preview) walks the same three phases:
//!
//! ```text
//! Mounted ──begin_close──▶ Closing ──finish_close──▶ Detached
//! ```
//!
//! # Invariants
//!
//! 1. Transitions only move forward. There is no abort-close or re-open path.
//! 2. `Detached` is absorbing: every transition request on it is refused.
//! 3. Only `Mounted` overlays are interactive.
//!
//! # Failure Modes
//!
//! | Request | Current phase | Behavior |
//! |---------|---------------|----------|
//! | `begin_close` | `Closing` / `Detached` | Refused, returns `false` |
//! | `finish_close` | `Mounted` / `Detached` | Refused, returns `false` |

use core::fmt;

/// Lifecycle phase of a single overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayPhase {
    /// Visible and interactive.
    #[default]
    Mounted,
    /// Exit animation playing; no longer interactive.
    Closing,
    /// Removed from the view tree. Terminal.
    Detached,
}

impl OverlayPhase {
    #[inline]
    pub const fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted)
    }

    #[inline]
    pub const fn is_closing(self) -> bool {
        matches!(self, Self::Closing)
    }

    #[inline]
    pub const fn is_detached(self) -> bool {
        matches!(self, Self::Detached)
    }

    /// Move `Mounted -> Closing`.
    ///
    /// Returns `true` if the transition happened.
    pub fn begin_close(&mut self) -> bool {
        if self.is_mounted() {
            *self = Self::Closing;
            true
        } else {
            false
        }
    }

    /// Move `Closing -> Detached`.
    ///
    /// Returns `true` if the transition happened. Callers are expected to
    /// have checked that the completion event belongs to the terminal exit
    /// animation before calling this.
    pub fn finish_close(&mut self) -> bool {
        if self.is_closing() {
            *self = Self::Detached;
            true
        } else {
            false
        }
    }

    /// Stable lowercase name, used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Closing => "closing",
            Self::Detached => "detached",
        }
    }
}

impl fmt::Display for OverlayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mounted() {
        assert_eq!(OverlayPhase::default(), OverlayPhase::Mounted);
    }

    #[test]
    fn forward_path() {
        let mut phase = OverlayPhase::Mounted;
        assert!(phase.begin_close());
        assert_eq!(phase, OverlayPhase::Closing);
        assert!(phase.finish_close());
        assert_eq!(phase, OverlayPhase::Detached);
        assert!(phase.is_detached());
    }

    #[test]
    fn finish_requires_closing() {
        let mut phase = OverlayPhase::Mounted;
        assert!(!phase.finish_close());
        assert_eq!(phase, OverlayPhase::Mounted);
    }

    #[test]
    fn double_begin_close_is_refused() {
        let mut phase = OverlayPhase::Mounted;
        assert!(phase.begin_close());
        assert!(!phase.begin_close());
        assert_eq!(phase, OverlayPhase::Closing);
    }

    #[test]
    fn detached_is_absorbing() {
        let mut phase = OverlayPhase::Detached;
        assert!(!phase.begin_close());
        assert!(!phase.finish_close());
        assert_eq!(phase, OverlayPhase::Detached);
    }

    #[test]
    fn display_names() {
        assert_eq!(OverlayPhase::Mounted.to_string(), "mounted");
        assert_eq!(OverlayPhase::Closing.to_string(), "closing");
        assert_eq!(OverlayPhase::Detached.to_string(), "detached");
    }
}
