#![forbid(unsafe_code)]

//! scrim: stacked modal dialogs and a media preview over any view layer.
//!
//! This crate re-exports the workspace crates and offers a [`prelude`].
//!
//! - [`scrim_core`]: lifecycle phases, exit animations, timings, media sniffing.
//! - [`scrim_runtime`]: observables, the deferred timer queue, the loading flag.
//! - [`scrim_widgets`]: the overlay stack, preview slot, and [`OverlayContext`].
//!
//! ```
//! use scrim::prelude::*;
//! use std::time::Duration;
//!
//! let host = RecordingHost::new();
//! let mut overlays = OverlayContext::new(host.clone());
//!
//! let id = overlays.open(OverlayConfig::new("Saved").paragraph("Your changes were saved."));
//! overlays.acknowledge(id);
//! assert_eq!(overlays.phase(id), OverlayPhase::Closing);
//!
//! host.drive(&mut overlays, Duration::from_millis(400));
//! assert_eq!(overlays.phase(id), OverlayPhase::Detached);
//! ```

pub use scrim_core;
pub use scrim_runtime;
pub use scrim_widgets;

pub use scrim_core::{
    ConfigError, ExitTransition, MediaFormat, OverlayPhase, OverlayTimings, detect_format,
};
pub use scrim_runtime::{LoadingIndicator, Observable, Subscription};
pub use scrim_widgets::{
    OverlayConfig, OverlayContext, OverlayHost, OverlayId, OverlayView, RequestFailure, Verdict,
};

#[cfg(feature = "tracing-json")]
pub use scrim_core::logging::init_json as init_logging;

pub mod prelude {
    pub use scrim_core::{
        ConfigError, ExitAnimation, ExitTransition, MediaFormat, OverlayPhase, OverlayTimings,
        detect_format,
    };
    pub use scrim_runtime::{LoadingIndicator, Observable};
    pub use scrim_widgets::overlay::{
        DialogAction, FocusControl, FocusTarget, OverlayButtons, OverlayConfig, OverlayContext,
        OverlayHost, OverlayId, OverlayView, RecordingHost, RequestFailure, Verdict,
    };
}
