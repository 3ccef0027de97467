#![forbid(unsafe_code)]

//! The seam between overlay bookkeeping and whatever draws it.

use scrim_core::ExitAnimation;

use crate::overlay::{FocusTarget, OverlayButtons, OverlayId};

/// What the host should attach for a newly mounted overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayView<'a> {
    /// A stacked dialog.
    Dialog {
        id: OverlayId,
        depth: usize,
        z_index: u32,
        title: &'a str,
        paragraphs: &'a [String],
        buttons: OverlayButtons,
    },
    /// The media preview.
    Preview {
        id: OverlayId,
        z_index: u32,
        title: &'a str,
        /// `data:` URI, or `None` if the payload format is not recognised.
        source: Option<&'a str>,
    },
}

impl OverlayView<'_> {
    pub fn id(&self) -> OverlayId {
        match self {
            Self::Dialog { id, .. } | Self::Preview { id, .. } => *id,
        }
    }

    pub fn z_index(&self) -> u32 {
        match self {
            Self::Dialog { z_index, .. } | Self::Preview { z_index, .. } => *z_index,
        }
    }
}

/// A view layer able to show overlays.
///
/// The host never calls back into the overlay context. It reports exit
/// animation completions out of band; the application forwards them to
/// [`OverlayContext::animation_end`](crate::overlay::OverlayContext::animation_end).
pub trait OverlayHost {
    /// Attach a view for a new overlay.
    fn mount(&mut self, view: OverlayView<'_>);

    /// Start the exit animations of a mounted overlay, all at once.
    fn play_exit(&mut self, id: OverlayId, animations: &[ExitAnimation]);

    /// Move keyboard focus to a control of a mounted dialog.
    fn focus(&mut self, id: OverlayId, target: FocusTarget);

    /// Detach and release the view of a closed overlay.
    fn unmount(&mut self, id: OverlayId);
}
