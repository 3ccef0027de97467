#![forbid(unsafe_code)]

//! Core primitives for scrim overlays.
//!
//! Nothing here knows about stacks or views. The crate provides the
//! building blocks the overlay widgets are assembled from:
//!
//! - [`lifecycle`]: the `Mounted -> Closing -> Detached` phase machine.
//! - [`animation`]: named exit animations and the terminal-animation rule.
//! - [`timings`]: exit durations and their policy-file loading.
//! - [`media`]: base64 payload sniffing for previews.
//! - [`logging`]: optional JSON subscriber setup.

pub mod animation;
pub mod lifecycle;
pub mod logging;
pub mod media;
pub mod timings;

pub use animation::{ExitAnimation, ExitTransition, FADE_OUT, TRANSLATE_OUT};
pub use lifecycle::OverlayPhase;
pub use media::{MediaFormat, data_uri, detect_format};
pub use timings::{ConfigError, OverlayTimings};
