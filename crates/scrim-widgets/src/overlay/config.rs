#![forbid(unsafe_code)]

//! Dialog configuration and action verdicts.

use std::fmt;

use bitflags::bitflags;

use crate::overlay::OverlayContext;

/// Outcome of an accept or cancel callback.
///
/// Callbacks may return `bool`, `()`, or a `Verdict`. Only an explicit
/// `false` (or [`Verdict::Keep`]) keeps the dialog open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Close,
    Keep,
}

impl From<bool> for Verdict {
    fn from(close: bool) -> Self {
        if close { Self::Close } else { Self::Keep }
    }
}

impl From<()> for Verdict {
    fn from(_: ()) -> Self {
        Self::Close
    }
}

/// User action on a mounted dialog that may carry a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogAction {
    Accept,
    Cancel,
}

impl DialogAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Cancel => "cancel",
        }
    }
}

/// Accept/cancel callback. It receives the owning context so it can open a
/// nested dialog (and return `false` to keep the current one).
pub type OverlayCallback = Box<dyn FnMut(&mut OverlayContext) -> Verdict>;

bitflags! {
    /// Controls rendered in a dialog's button row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OverlayButtons: u8 {
        /// Plain close button, shown when the dialog has no callbacks.
        const DEFAULT = 1 << 0;
        const ACCEPT = 1 << 1;
        const CANCEL = 1 << 2;
    }
}

/// Caller-supplied dialog description.
///
/// Treated as immutable once handed to [`OverlayContext::open`].
pub struct OverlayConfig {
    pub(crate) title: String,
    pub(crate) content: Vec<String>,
    pub(crate) on_accept: Option<OverlayCallback>,
    pub(crate) on_cancel: Option<OverlayCallback>,
    pub(crate) buttons: Option<OverlayButtons>,
}

impl OverlayConfig {
    /// Create a dialog with a title and no paragraphs.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            on_accept: None,
            on_cancel: None,
            buttons: None,
        }
    }

    /// Append one paragraph.
    #[must_use]
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.content.push(text.into());
        self
    }

    /// Append several paragraphs in order.
    #[must_use]
    pub fn content<I, S>(mut self, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content.extend(paragraphs.into_iter().map(Into::into));
        self
    }

    /// Set the accept callback.
    #[must_use]
    pub fn on_accept<F, R>(mut self, mut callback: F) -> Self
    where
        F: FnMut(&mut OverlayContext) -> R + 'static,
        R: Into<Verdict>,
    {
        self.on_accept = Some(Box::new(move |ctx: &mut OverlayContext| callback(ctx).into()));
        self
    }

    /// Set the cancel callback.
    #[must_use]
    pub fn on_cancel<F, R>(mut self, mut callback: F) -> Self
    where
        F: FnMut(&mut OverlayContext) -> R + 'static,
        R: Into<Verdict>,
    {
        self.on_cancel = Some(Box::new(move |ctx: &mut OverlayContext| callback(ctx).into()));
        self
    }

    /// Override the derived button row.
    #[must_use]
    pub fn buttons(mut self, buttons: OverlayButtons) -> Self {
        self.buttons = Some(buttons);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.content
    }

    pub fn has_callback(&self, action: DialogAction) -> bool {
        match action {
            DialogAction::Accept => self.on_accept.is_some(),
            DialogAction::Cancel => self.on_cancel.is_some(),
        }
    }

    /// Buttons the dialog shows.
    ///
    /// Unless overridden: accept if there is an accept callback, cancel if
    /// there is a cancel callback, and the default button when there is
    /// neither.
    pub fn effective_buttons(&self) -> OverlayButtons {
        if let Some(buttons) = self.buttons {
            return buttons;
        }
        let mut buttons = OverlayButtons::empty();
        if self.on_accept.is_some() {
            buttons |= OverlayButtons::ACCEPT;
        }
        if self.on_cancel.is_some() {
            buttons |= OverlayButtons::CANCEL;
        }
        if buttons.is_empty() {
            buttons = OverlayButtons::DEFAULT;
        }
        buttons
    }

    pub(crate) fn slot(&mut self, action: DialogAction) -> &mut Option<OverlayCallback> {
        match action {
            DialogAction::Accept => &mut self.on_accept,
            DialogAction::Cancel => &mut self.on_cancel,
        }
    }
}

impl fmt::Debug for OverlayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayConfig")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("on_accept", &self.on_accept.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("buttons", &self.effective_buttons())
            .finish()
    }
}
