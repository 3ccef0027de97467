#![forbid(unsafe_code)]

//! Dialog stack with stable depths and animation-gated teardown.
//!
//! The `OverlayStack` keeps two views of its dialogs:
//!
//! - **Records**: every dialog that has not yet detached, keyed by
//!   [`OverlayId`] (creation order). Closing dialogs stay here until their
//!   terminal exit animation completes.
//! - **Bookkeeping**: the LIFO list of *tracked* dialogs, all of them
//!   `Mounted`. Its length is the depth given to the next dialog.
//!
//! # Invariants
//!
//! - Every tracked dialog is `Mounted`; closing removes it from bookkeeping
//!   before its exit animation starts.
//! - Depths are assigned once and never renumbered.
//! - Only `close_all` closes dialogs below the top.
//!
//! # Failure Modes
//!
//! - `close_top()` / `close_all()` on an empty stack return nothing (no panic).
//! - `animation_end()` for an unknown or already detached ID returns `false`.

use std::collections::BTreeMap;

use scrim_core::{ExitTransition, OverlayPhase};

use crate::overlay::{OverlayConfig, OverlayHost, OverlayId, OverlayInstance};

/// Records and bookkeeping for stacked dialogs.
#[derive(Debug, Default)]
pub struct OverlayStack {
    /// Dialogs not yet detached, in creation order.
    records: BTreeMap<OverlayId, OverlayInstance>,
    /// Tracked (mounted) dialogs, bottom to top.
    order: Vec<OverlayId>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Stack Operations ---

    /// Create a dialog on top of the stack and mount it.
    pub(crate) fn open(
        &mut self,
        config: OverlayConfig,
        exit: ExitTransition,
        host: &mut dyn OverlayHost,
    ) -> OverlayId {
        let instance = OverlayInstance::new(self.order.len(), config, exit);
        let id = instance.id();
        self.order.push(id);
        host.mount(instance.view());
        self.records.insert(id, instance);
        id
    }

    /// Untrack the top dialog and start its exit animation.
    pub(crate) fn close_top(&mut self, host: &mut dyn OverlayHost) -> Option<OverlayId> {
        let id = self.order.pop()?;
        if let Some(instance) = self.records.get_mut(&id) {
            instance.begin_close(host);
        }
        Some(id)
    }

    /// Untrack every dialog, then start each exit animation bottom to top.
    pub(crate) fn close_all(&mut self, host: &mut dyn OverlayHost) -> Vec<OverlayId> {
        let closed = std::mem::take(&mut self.order);
        for id in &closed {
            if let Some(instance) = self.records.get_mut(id) {
                instance.begin_close(host);
            }
        }
        closed
    }

    /// Route an animation completion. On detach the record is dropped and the
    /// host releases the view.
    pub(crate) fn animation_end(
        &mut self,
        id: OverlayId,
        name: &str,
        host: &mut dyn OverlayHost,
    ) -> bool {
        let detached = self
            .records
            .get_mut(&id)
            .is_some_and(|instance| instance.animation_end(name));
        if detached {
            self.records.remove(&id);
            host.unmount(id);
        }
        detached
    }

    pub(crate) fn get_mut(&mut self, id: OverlayId) -> Option<&mut OverlayInstance> {
        self.records.get_mut(&id)
    }

    // --- State Queries ---

    /// Number of tracked dialogs.
    #[inline]
    pub fn tracked(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `id` is tracked (mounted and on the stack).
    pub fn contains(&self, id: OverlayId) -> bool {
        self.order.contains(&id)
    }

    /// ID of the top dialog, if any.
    pub fn top_id(&self) -> Option<OverlayId> {
        self.order.last().copied()
    }

    /// Look up any dialog that has not detached yet.
    pub fn get(&self, id: OverlayId) -> Option<&OverlayInstance> {
        self.records.get(&id)
    }

    /// Phase of a dialog. IDs without a record have detached.
    pub fn phase(&self, id: OverlayId) -> OverlayPhase {
        self.records
            .get(&id)
            .map_or(OverlayPhase::Detached, OverlayInstance::phase)
    }

    /// Tracked dialogs, bottom to top.
    pub fn tracked_instances(&self) -> impl Iterator<Item = &OverlayInstance> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Every dialog still holding a view (mounted or closing), in creation
    /// order.
    pub fn live(&self) -> impl Iterator<Item = &OverlayInstance> {
        self.records.values()
    }

    /// Number of dialogs still holding a view.
    pub fn live_count(&self) -> usize {
        self.records.len()
    }
}
