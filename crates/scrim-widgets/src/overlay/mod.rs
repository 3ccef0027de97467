#![forbid(unsafe_code)]

//! Overlay stack, preview slot, and the context that drives them.
//!
//! # Lifecycle
//!
//! Every overlay walks `Mounted -> Closing -> Detached`
//! ([`scrim_core::OverlayPhase`]). Closing asks the [`OverlayHost`] to play
//! the exit animations; the host later reports each completion through
//! [`OverlayContext::animation_end`]. Only the terminal animation detaches the
//! overlay and releases its view.
//!
//! # Stack Semantics
//!
//! - `open` assigns `depth = tracked count` and pushes on top.
//! - `close` pops the top from bookkeeping *before* its exit animation starts,
//!   so an `open` during the animation reuses the freed depth.
//! - `close_all` clears bookkeeping synchronously and never runs callbacks.
//! - Depths are never renumbered.
//!
//! # Preview Slot
//!
//! At most one preview exists at a time. A second `open_preview` while the
//! first is mounted or still closing is ignored.
//!
//! # Focus
//!
//! 100 ms after a dialog opens, the first present control in the order
//! default, accept, cancel receives focus, provided the dialog is still
//! mounted.
//!
//! # Example
//!
//! ```
//! use scrim_widgets::overlay::{OverlayConfig, OverlayContext, RecordingHost};
//! use std::time::Duration;
//!
//! let host = RecordingHost::new();
//! let mut overlays = OverlayContext::new(host.clone());
//!
//! let first = overlays.open(OverlayConfig::new("Delete file?").paragraph("This cannot be undone."));
//! let second = overlays.open(OverlayConfig::new("Really?").on_accept(|_| false));
//! assert_eq!(overlays.stack().get(second).map(|o| o.depth()), Some(1));
//!
//! overlays.close();
//! host.drive(&mut overlays, Duration::from_millis(400));
//! assert!(overlays.phase(second).is_detached());
//! assert!(overlays.phase(first).is_mounted());
//! ```

mod config;
mod context;
mod focus;
mod host;
mod instance;
mod notice;
mod preview;
mod recording;
mod stack;

pub use config::{DialogAction, OverlayButtons, OverlayCallback, OverlayConfig, Verdict};
pub use context::OverlayContext;
pub use focus::{FOCUS_DELAY, FocusControl, FocusTarget, initial_focus};
pub use host::{OverlayHost, OverlayView};
pub use instance::{BASE_OVERLAY_Z, OverlayId, OverlayInstance, Z_INCREMENT};
pub use notice::RequestFailure;
pub use preview::{DEFAULT_PREVIEW_TITLE, PREVIEW_Z, PreviewOverlay, PreviewSlot};
pub use recording::{HostEvent, RecordingHost, ViewKind};
pub use stack::OverlayStack;
