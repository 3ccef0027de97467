#![forbid(unsafe_code)]

//! Overlay widgets for scrim.
//!
//! The [`overlay`] module holds the stacked dialogs, the single-slot media
//! preview, and the [`OverlayContext`] that ties them to a view host.

pub mod overlay;

pub use overlay::{
    FocusControl, FocusTarget, HostEvent, OverlayButtons, OverlayConfig, OverlayContext,
    OverlayHost, OverlayId, OverlayInstance, OverlayStack, OverlayView, PreviewOverlay,
    PreviewSlot, RecordingHost, RequestFailure, Verdict,
};
