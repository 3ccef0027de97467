#![forbid(unsafe_code)]

//! Single-slot media preview.
//!
//! The slot holds zero or one [`PreviewOverlay`]. It is independent of the
//! dialog stack and follows the same `Mounted -> Closing -> Detached`
//! lifecycle.
//!
//! # Invariants
//!
//! - A request to open while the slot is occupied (mounted *or* closing) is
//!   ignored; the first preview wins.
//! - The slot empties exactly when its occupant detaches.

use scrim_core::{ExitTransition, MediaFormat, OverlayPhase, data_uri, detect_format};

use crate::overlay::instance::ExitLifecycle;
use crate::overlay::{OverlayHost, OverlayId, OverlayView};

/// Title shown when the caller does not supply one.
pub const DEFAULT_PREVIEW_TITLE: &str = "Image preview";

/// Z-index of the preview layer, above any realistic dialog depth.
pub const PREVIEW_Z: u32 = 5000;

/// A mounted (or closing) media preview.
#[derive(Debug)]
pub struct PreviewOverlay {
    id: OverlayId,
    image: String,
    title: String,
    format: MediaFormat,
    source: Option<String>,
    lifecycle: ExitLifecycle,
}

impl PreviewOverlay {
    fn new(image: String, title: Option<String>, exit: ExitTransition) -> Self {
        let format = detect_format(&image);
        let source = data_uri(&image);
        Self {
            id: OverlayId::next(),
            title: title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_PREVIEW_TITLE.to_string()),
            image,
            format,
            source,
            lifecycle: ExitLifecycle::new(exit),
        }
    }

    #[inline]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// The raw base64 payload as supplied.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> MediaFormat {
        self.format
    }

    /// `data:` URI shown by the view, `None` for unrecognised payloads.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[inline]
    pub fn phase(&self) -> OverlayPhase {
        self.lifecycle.phase()
    }

    pub fn view(&self) -> OverlayView<'_> {
        OverlayView::Preview {
            id: self.id,
            z_index: PREVIEW_Z,
            title: &self.title,
            source: self.source(),
        }
    }
}

/// Holder for at most one preview.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    occupant: Option<PreviewOverlay>,
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a preview if the slot is empty. Returns `None` if occupied.
    pub(crate) fn open(
        &mut self,
        image: String,
        title: Option<String>,
        exit: ExitTransition,
        host: &mut dyn OverlayHost,
    ) -> Option<OverlayId> {
        if self.occupant.is_some() {
            return None;
        }
        let preview = PreviewOverlay::new(image, title, exit);
        let id = preview.id();
        host.mount(preview.view());
        self.occupant = Some(preview);
        Some(id)
    }

    /// Start the occupant's exit animation. Returns `false` if the slot is
    /// empty or already closing.
    pub(crate) fn close(&mut self, host: &mut dyn OverlayHost) -> bool {
        match self.occupant.as_mut() {
            Some(preview) => preview.lifecycle.begin_close(preview.id, host),
            None => false,
        }
    }

    /// Route an animation completion; empties the slot on detach.
    pub(crate) fn animation_end(
        &mut self,
        id: OverlayId,
        name: &str,
        host: &mut dyn OverlayHost,
    ) -> bool {
        let detached = self
            .occupant
            .as_mut()
            .filter(|preview| preview.id == id)
            .is_some_and(|preview| preview.lifecycle.animation_end(name));
        if detached {
            self.occupant = None;
            host.unmount(id);
        }
        detached
    }

    pub fn occupant(&self) -> Option<&PreviewOverlay> {
        self.occupant.as_ref()
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Phase of the preview with `id`; anything not in the slot has detached.
    pub fn phase(&self, id: OverlayId) -> OverlayPhase {
        self.occupant
            .as_ref()
            .filter(|preview| preview.id == id)
            .map_or(OverlayPhase::Detached, PreviewOverlay::phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{HostEvent, RecordingHost, ViewKind};
    use scrim_core::{FADE_OUT, TRANSLATE_OUT};

    const PNG: &str = "iVBORw0KGgoAAAANSUhEUg";

    fn open(slot: &mut PreviewSlot, host: &mut RecordingHost, image: &str) -> Option<OverlayId> {
        slot.open(image.to_string(), None, ExitTransition::default(), host)
    }

    #[test]
    fn open_fills_empty_slot() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        let id = open(&mut slot, &mut host, PNG);

        assert!(id.is_some());
        let preview = slot.occupant().unwrap();
        assert_eq!(preview.title(), DEFAULT_PREVIEW_TITLE);
        assert_eq!(preview.format(), MediaFormat::Png);
        assert_eq!(preview.source(), Some("data:image/png;base64,iVBORw0KGgoAAAANSUhEUg"));
    }

    #[test]
    fn second_open_keeps_first() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        let first = open(&mut slot, &mut host, PNG);
        assert!(open(&mut slot, &mut host, "/9j/4AAQ").is_none());
        assert_eq!(slot.occupant().map(PreviewOverlay::id), first);
        assert_eq!(slot.occupant().map(PreviewOverlay::image), Some(PNG));
    }

    #[test]
    fn open_while_closing_is_ignored() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        let first = open(&mut slot, &mut host, PNG).unwrap();
        assert!(slot.close(&mut host));
        assert!(open(&mut slot, &mut host, PNG).is_none());
        assert_eq!(slot.phase(first), OverlayPhase::Closing);
    }

    #[test]
    fn detach_clears_slot() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        let id = open(&mut slot, &mut host, PNG).unwrap();
        slot.close(&mut host);

        assert!(!slot.animation_end(id, TRANSLATE_OUT, &mut host));
        assert!(slot.is_occupied());
        assert!(slot.animation_end(id, FADE_OUT, &mut host));
        assert!(!slot.is_occupied());
        assert_eq!(slot.phase(id), OverlayPhase::Detached);
        assert!(open(&mut slot, &mut host, PNG).is_some());
    }

    #[test]
    fn close_empty_or_twice_is_noop() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        assert!(!slot.close(&mut host));
        open(&mut slot, &mut host, PNG);
        assert!(slot.close(&mut host));
        assert!(!slot.close(&mut host));
    }

    #[test]
    fn foreign_id_does_not_detach() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        open(&mut slot, &mut host, PNG);
        slot.close(&mut host);
        assert!(!slot.animation_end(OverlayId::next(), FADE_OUT, &mut host));
        assert!(slot.is_occupied());
    }

    #[test]
    fn unknown_payload_mounts_without_source() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        let id = slot
            .open(
                "R0lGODlh".to_string(),
                Some("Scan".to_string()),
                ExitTransition::default(),
                &mut host,
            )
            .unwrap();

        assert_eq!(
            host.events(),
            vec![HostEvent::Mounted {
                id,
                kind: ViewKind::Preview { renderable: false },
                z_index: PREVIEW_Z,
                title: "Scan".to_string(),
            }]
        );
    }

    #[test]
    fn empty_title_falls_back_to_default() {
        let mut host = RecordingHost::new();
        let mut slot = PreviewSlot::new();
        slot.open(PNG.to_string(), Some(String::new()), ExitTransition::default(), &mut host);
        assert_eq!(slot.occupant().map(PreviewOverlay::title), Some(DEFAULT_PREVIEW_TITLE));
    }
}
