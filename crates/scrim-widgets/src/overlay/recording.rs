#![forbid(unsafe_code)]

//! Headless host that records what it was asked to do.
//!
//! `RecordingHost` is a cheap clonable handle: keep one clone, give the other
//! to the [`OverlayContext`]. Exit animations are scheduled on an internal
//! logical clock and come due with [`RecordingHost::advance`], the way a real
//! view layer would report them after their declared durations.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

use scrim_core::ExitAnimation;
use scrim_runtime::DeferredQueue;

use crate::overlay::{FocusTarget, OverlayContext, OverlayHost, OverlayId, OverlayView};

/// Kind of view that was mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dialog { depth: usize },
    Preview { renderable: bool },
}

/// One call the host received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Mounted {
        id: OverlayId,
        kind: ViewKind,
        z_index: u32,
        title: String,
    },
    ExitStarted {
        id: OverlayId,
        animations: Vec<&'static str>,
    },
    Focused {
        id: OverlayId,
        target: FocusTarget,
    },
    Unmounted {
        id: OverlayId,
    },
}

#[derive(Debug, Default)]
struct Recording {
    events: Vec<HostEvent>,
    mounted: BTreeSet<OverlayId>,
    animations: DeferredQueue<(OverlayId, &'static str)>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first.
    pub fn events(&self) -> Vec<HostEvent> {
        self.inner.borrow().events.clone()
    }

    /// Drain the recorded calls.
    pub fn take_events(&self) -> Vec<HostEvent> {
        std::mem::take(&mut self.inner.borrow_mut().events)
    }

    /// IDs currently attached, in creation order.
    pub fn mounted(&self) -> Vec<OverlayId> {
        self.inner.borrow().mounted.iter().copied().collect()
    }

    pub fn is_mounted(&self, id: OverlayId) -> bool {
        self.inner.borrow().mounted.contains(&id)
    }

    /// Focus calls so far, oldest first.
    pub fn focused(&self) -> Vec<(OverlayId, FocusTarget)> {
        self.inner
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Focused { id, target } => Some((*id, *target)),
                _ => None,
            })
            .collect()
    }

    /// Move the animation clock forward; returns `(id, animation)` pairs that
    /// finished, in completion order.
    pub fn advance(&self, elapsed: Duration) -> Vec<(OverlayId, &'static str)> {
        self.inner.borrow_mut().animations.advance(elapsed)
    }

    /// Advance both this host and `overlays` by `elapsed`, delivering every
    /// completed animation to the context.
    pub fn drive(&self, overlays: &mut OverlayContext, elapsed: Duration) {
        for (id, name) in self.advance(elapsed) {
            overlays.animation_end(id, name);
        }
        overlays.advance(elapsed);
    }
}

impl OverlayHost for RecordingHost {
    fn mount(&mut self, view: OverlayView<'_>) {
        let (kind, title) = match view {
            OverlayView::Dialog { depth, title, .. } => (ViewKind::Dialog { depth }, title),
            OverlayView::Preview { title, source, .. } => (
                ViewKind::Preview {
                    renderable: source.is_some(),
                },
                title,
            ),
        };
        let mut inner = self.inner.borrow_mut();
        inner.mounted.insert(view.id());
        inner.events.push(HostEvent::Mounted {
            id: view.id(),
            kind,
            z_index: view.z_index(),
            title: title.to_string(),
        });
    }

    fn play_exit(&mut self, id: OverlayId, animations: &[ExitAnimation]) {
        let mut inner = self.inner.borrow_mut();
        for animation in animations {
            inner.animations.schedule(animation.duration, (id, animation.name));
        }
        inner.events.push(HostEvent::ExitStarted {
            id,
            animations: animations.iter().map(|a| a.name).collect(),
        });
    }

    fn focus(&mut self, id: OverlayId, target: FocusTarget) {
        self.inner
            .borrow_mut()
            .events
            .push(HostEvent::Focused { id, target });
    }

    fn unmount(&mut self, id: OverlayId) {
        let mut inner = self.inner.borrow_mut();
        inner.mounted.remove(&id);
        inner.events.push(HostEvent::Unmounted { id });
    }
}
