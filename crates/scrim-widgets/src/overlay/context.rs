#![forbid(unsafe_code)]

//! The overlay context: one stack, one preview slot, one host.
//!
//! Every public operation is total. Misuse (closing an empty stack, acting on
//! a dialog that is no longer mounted, a stray animation event) is logged at
//! `trace` and otherwise ignored.

use std::fmt;
use std::time::Duration;

use scrim_core::{ConfigError, ExitTransition, OverlayPhase, OverlayTimings};
use scrim_runtime::{DeferredQueue, FrameClock, LoadingIndicator};

use crate::overlay::{
    DialogAction, FOCUS_DELAY, OverlayConfig, OverlayHost, OverlayId, OverlayStack,
    PreviewSlot, RequestFailure, Verdict,
};

/// Owner of every overlay shown through one host.
///
/// Construct it once and hand `&mut` access to whatever composes the UI.
/// Callbacks receive the same context, so they can open nested dialogs.
pub struct OverlayContext {
    host: Box<dyn OverlayHost>,
    stack: OverlayStack,
    preview: PreviewSlot,
    exit: ExitTransition,
    focus_queue: DeferredQueue<OverlayId>,
    clock: FrameClock,
    loading: LoadingIndicator,
}

impl OverlayContext {
    /// Context with the default exit timings.
    pub fn new(host: impl OverlayHost + 'static) -> Self {
        Self::with_exit(host, ExitTransition::default())
    }

    /// Context with custom exit timings. Zero durations are rejected.
    pub fn with_timings(
        host: impl OverlayHost + 'static,
        timings: OverlayTimings,
    ) -> Result<Self, ConfigError> {
        timings.validate()?;
        Ok(Self::with_exit(host, ExitTransition::new(&timings)))
    }

    fn with_exit(host: impl OverlayHost + 'static, exit: ExitTransition) -> Self {
        Self {
            host: Box::new(host),
            stack: OverlayStack::new(),
            preview: PreviewSlot::new(),
            exit,
            focus_queue: DeferredQueue::new(),
            clock: FrameClock::new(),
            loading: LoadingIndicator::new(),
        }
    }

    // --- Dialog stack ---

    /// Mount a dialog on top of the stack.
    pub fn open(&mut self, config: OverlayConfig) -> OverlayId {
        let id = self.stack.open(config, self.exit, self.host.as_mut());
        self.focus_queue.schedule(FOCUS_DELAY, id);
        tracing::debug!(
            overlay = %id,
            depth = self.stack.tracked() - 1,
            "overlay opened"
        );
        id
    }

    /// Close the top dialog. Returns its ID, or `None` on an empty stack.
    pub fn close(&mut self) -> Option<OverlayId> {
        let closed = self.stack.close_top(self.host.as_mut());
        match closed {
            Some(id) => {
                tracing::debug!(overlay = %id, "overlay closing");
                self.prune_focus();
            }
            None => tracing::trace!("close on empty overlay stack ignored"),
        }
        closed
    }

    /// Close every tracked dialog without running callbacks.
    pub fn close_all(&mut self) -> Vec<OverlayId> {
        let closed = self.stack.close_all(self.host.as_mut());
        if !closed.is_empty() {
            tracing::debug!(count = closed.len(), "closing all overlays");
            self.prune_focus();
        }
        closed
    }

    /// Forget pending focus for dialogs that are no longer tracked.
    fn prune_focus(&mut self) {
        let stack = &self.stack;
        self.focus_queue.retain(|id| stack.contains(*id));
    }

    /// The accept button of dialog `id` was pressed.
    ///
    /// Runs the accept callback, then closes the top dialog unless the
    /// callback returned `false`. If the callback already closed `id` itself,
    /// nothing further is closed.
    pub fn accept(&mut self, id: OverlayId) {
        self.run_action(id, Some(DialogAction::Accept));
    }

    /// The cancel button of dialog `id` was pressed.
    ///
    /// Same rules as [`accept`](Self::accept), with the cancel callback.
    pub fn cancel(&mut self, id: OverlayId) {
        self.run_action(id, Some(DialogAction::Cancel));
    }

    /// The default button of dialog `id` was pressed.
    pub fn acknowledge(&mut self, id: OverlayId) {
        self.run_action(id, None);
    }

    fn run_action(&mut self, id: OverlayId, action: Option<DialogAction>) {
        let Some(instance) = self.stack.get_mut(id) else {
            tracing::trace!(overlay = %id, "action on detached overlay ignored");
            return;
        };
        if !instance.phase().is_mounted() {
            tracing::trace!(overlay = %id, phase = %instance.phase(), "action on closing overlay ignored");
            return;
        }

        let callback = action.and_then(|action| Some((action, instance.take_callback(action)?)));
        let verdict = match callback {
            Some((action, mut callback)) => {
                tracing::debug!(overlay = %id, action = action.as_str(), "running overlay callback");
                let verdict = callback(self);
                if let Some(instance) = self.stack.get_mut(id) {
                    instance.restore_callback(action, callback);
                }
                verdict
            }
            None => Verdict::Close,
        };

        // The callback may already have closed the dialog itself.
        if verdict == Verdict::Close && self.stack.phase(id).is_mounted() {
            self.close();
        }
    }

    // --- Preview slot ---

    /// Show a base64 media payload. Ignored while a preview is mounted or
    /// closing.
    pub fn open_preview(
        &mut self,
        image: impl Into<String>,
        title: Option<String>,
    ) -> Option<OverlayId> {
        let opened = self
            .preview
            .open(image.into(), title, self.exit, self.host.as_mut());
        match (opened, self.preview.occupant()) {
            (Some(id), Some(preview)) => {
                tracing::debug!(overlay = %id, format = %preview.format(), "preview opened");
            }
            _ => tracing::trace!("preview slot occupied, open ignored"),
        }
        opened
    }

    /// Start closing the preview, if one is mounted.
    pub fn close_preview(&mut self) -> bool {
        let closing = self.preview.close(self.host.as_mut());
        if !closing {
            tracing::trace!("close_preview with no mounted preview ignored");
        }
        closing
    }

    // --- Host events and time ---

    /// Deliver an exit animation completion reported by the host.
    pub fn animation_end(&mut self, id: OverlayId, name: &str) {
        let host = self.host.as_mut();
        if self.stack.animation_end(id, name, host) || self.preview.animation_end(id, name, host) {
            tracing::debug!(overlay = %id, animation = name, "overlay detached");
        } else {
            tracing::trace!(overlay = %id, animation = name, "non-terminal animation end");
        }
    }

    /// Move logical time forward and apply any focus that came due.
    pub fn advance(&mut self, elapsed: Duration) {
        for id in self.focus_queue.advance(elapsed) {
            self.apply_focus(id);
        }
    }

    /// Advance by the wall-clock time since the previous call.
    pub fn pump(&mut self) {
        let elapsed = self.clock.tick();
        self.advance(elapsed);
    }

    fn apply_focus(&mut self, id: OverlayId) {
        let Some(instance) = self.stack.get(id).filter(|o| o.phase().is_mounted()) else {
            tracing::trace!(overlay = %id, "focus skipped, overlay no longer mounted");
            return;
        };
        if let Some(target) = instance.focus_target() {
            tracing::trace!(overlay = %id, %target, "focusing control");
            self.host.focus(id, target);
        }
    }

    // --- Notices ---

    /// Log a failed request and show its notice, if it has one.
    pub fn report_failure(&mut self, failure: RequestFailure) -> Option<OverlayId> {
        tracing::error!(%failure, "request failed");
        failure.notice().map(|notice| self.open(notice))
    }

    // --- Queries ---

    pub fn stack(&self) -> &OverlayStack {
        &self.stack
    }

    pub fn preview(&self) -> &PreviewSlot {
        &self.preview
    }

    /// Number of tracked (mounted) dialogs.
    #[inline]
    pub fn tracked(&self) -> usize {
        self.stack.tracked()
    }

    /// Phase of any overlay, dialog or preview.
    pub fn phase(&self, id: OverlayId) -> OverlayPhase {
        match self.stack.phase(id) {
            OverlayPhase::Detached => self.preview.phase(id),
            phase => phase,
        }
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub fn exit_transition(&self) -> ExitTransition {
        self.exit
    }

    /// Logical time until the next pending focus, if any.
    pub fn next_focus_due(&self) -> Option<Duration> {
        self.focus_queue.next_due()
    }
}

impl fmt::Debug for OverlayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayContext")
            .field("stack", &self.stack)
            .field("preview", &self.preview)
            .field("exit", &self.exit)
            .field("focus_queue", &self.focus_queue)
            .field("loading", &self.loading.is_loading())
            .finish_non_exhaustive()
    }
}
