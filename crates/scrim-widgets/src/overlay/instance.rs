#![forbid(unsafe_code)]

//! A single stacked dialog and the exit lifecycle shared with previews.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use scrim_core::{ExitTransition, OverlayPhase};

use crate::overlay::{
    DialogAction, FocusTarget, OverlayCallback, OverlayConfig, OverlayHost, OverlayView,
    initial_focus,
};

/// Base z-index for the dialog layer.
pub const BASE_OVERLAY_Z: u32 = 1000;

/// Z-index increment between stacked dialogs.
pub const Z_INCREMENT: u32 = 10;

/// Global counter for unique overlay IDs.
static OVERLAY_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an overlay (dialog or preview).
///
/// IDs increase monotonically, so ordering by ID is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    pub(crate) fn next() -> Self {
        Self(OVERLAY_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

/// Phase plus exit transition, driven by host events.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExitLifecycle {
    phase: OverlayPhase,
    exit: ExitTransition,
}

impl ExitLifecycle {
    pub(crate) fn new(exit: ExitTransition) -> Self {
        Self {
            phase: OverlayPhase::Mounted,
            exit,
        }
    }

    #[inline]
    pub(crate) fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// `Mounted -> Closing`, handing the exit animations to the host.
    pub(crate) fn begin_close(&mut self, id: OverlayId, host: &mut dyn OverlayHost) -> bool {
        if !self.phase.begin_close() {
            return false;
        }
        host.play_exit(id, &self.exit.animations());
        true
    }

    /// Feed a completion event. Returns `true` on the transition to
    /// `Detached`; non-terminal names and repeated events return `false`.
    pub(crate) fn animation_end(&mut self, name: &str) -> bool {
        self.phase.is_closing() && self.exit.is_terminal(name) && self.phase.finish_close()
    }
}

/// A dialog owned by the [`OverlayStack`](crate::overlay::OverlayStack).
///
/// Invariants:
/// - `depth` is fixed at creation and never renumbered.
/// - The configuration is never altered; callbacks are only lent out while
///   they run.
#[derive(Debug)]
pub struct OverlayInstance {
    id: OverlayId,
    depth: usize,
    config: OverlayConfig,
    lifecycle: ExitLifecycle,
}

impl OverlayInstance {
    pub(crate) fn new(depth: usize, config: OverlayConfig, exit: ExitTransition) -> Self {
        Self {
            id: OverlayId::next(),
            depth,
            config,
            lifecycle: ExitLifecycle::new(exit),
        }
    }

    #[inline]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn phase(&self) -> OverlayPhase {
        self.lifecycle.phase()
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Layer index: `BASE_OVERLAY_Z + depth * Z_INCREMENT`, saturating.
    pub fn z_index(&self) -> u32 {
        let depth = u32::try_from(self.depth).unwrap_or(u32::MAX);
        BASE_OVERLAY_Z.saturating_add(depth.saturating_mul(Z_INCREMENT))
    }

    /// The control that should receive initial focus, if any.
    pub fn focus_target(&self) -> Option<FocusTarget> {
        initial_focus(self.config.effective_buttons()).map(|control| FocusTarget {
            depth: self.depth,
            control,
        })
    }

    pub fn view(&self) -> OverlayView<'_> {
        OverlayView::Dialog {
            id: self.id,
            depth: self.depth,
            z_index: self.z_index(),
            title: self.config.title(),
            paragraphs: self.config.paragraphs(),
            buttons: self.config.effective_buttons(),
        }
    }

    pub(crate) fn begin_close(&mut self, host: &mut dyn OverlayHost) -> bool {
        self.lifecycle.begin_close(self.id, host)
    }

    pub(crate) fn animation_end(&mut self, name: &str) -> bool {
        self.lifecycle.animation_end(name)
    }

    pub(crate) fn take_callback(&mut self, action: DialogAction) -> Option<OverlayCallback> {
        self.config.slot(action).take()
    }

    pub(crate) fn restore_callback(&mut self, action: DialogAction, callback: OverlayCallback) {
        let slot = self.config.slot(action);
        if slot.is_none() {
            *slot = Some(callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{FocusControl, HostEvent, RecordingHost};
    use scrim_core::{FADE_OUT, TRANSLATE_OUT};

    fn dialog(depth: usize, config: OverlayConfig) -> OverlayInstance {
        OverlayInstance::new(depth, config, ExitTransition::default())
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = OverlayId::next();
        let b = OverlayId::next();
        assert!(b > a);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn z_index_grows_with_depth() {
        let low = dialog(0, OverlayConfig::new("a"));
        let high = dialog(3, OverlayConfig::new("b"));
        assert_eq!(low.z_index(), BASE_OVERLAY_Z);
        assert_eq!(high.z_index(), BASE_OVERLAY_Z + 3 * Z_INCREMENT);
    }

    #[test]
    fn z_index_saturates() {
        let instance = dialog(usize::MAX, OverlayConfig::new("deep"));
        assert_eq!(instance.z_index(), u32::MAX);
    }

    #[test]
    fn translate_end_does_not_detach() {
        let mut host = RecordingHost::new();
        let mut instance = dialog(0, OverlayConfig::new("x"));
        assert!(instance.begin_close(&mut host));
        assert!(!instance.animation_end(TRANSLATE_OUT));
        assert!(instance.phase().is_closing());
        assert!(instance.animation_end(FADE_OUT));
        assert!(instance.phase().is_detached());
        assert!(!instance.animation_end(FADE_OUT));
    }

    #[test]
    fn begin_close_plays_both_animations_once() {
        let mut host = RecordingHost::new();
        let mut instance = dialog(0, OverlayConfig::new("x"));
        assert!(instance.begin_close(&mut host));
        assert!(!instance.begin_close(&mut host));
        assert_eq!(
            host.events(),
            vec![HostEvent::ExitStarted {
                id: instance.id(),
                animations: vec![TRANSLATE_OUT, FADE_OUT],
            }]
        );
    }

    #[test]
    fn animation_end_while_mounted_is_ignored() {
        let mut instance = dialog(0, OverlayConfig::new("x"));
        assert!(!instance.animation_end(FADE_OUT));
        assert!(instance.phase().is_mounted());
    }

    #[test]
    fn focus_target_uses_depth() {
        let instance = dialog(4, OverlayConfig::new("x").on_cancel(|_| ()));
        assert_eq!(
            instance.focus_target(),
            Some(FocusTarget {
                depth: 4,
                control: FocusControl::Cancel,
            })
        );
    }

    #[test]
    fn callback_lending_round_trip() {
        let mut instance = dialog(0, OverlayConfig::new("x").on_accept(|_| false));
        let callback = instance.take_callback(DialogAction::Accept);
        assert!(callback.is_some());
        assert!(!instance.config().has_callback(DialogAction::Accept));
        if let Some(callback) = callback {
            instance.restore_callback(DialogAction::Accept, callback);
        }
        assert!(instance.config().has_callback(DialogAction::Accept));
    }
}
