#![forbid(unsafe_code)]

//! Initial focus policy for dialogs.

use std::fmt;
use std::time::Duration;

use crate::overlay::OverlayButtons;

/// Delay between mounting a dialog and assigning its initial focus.
///
/// Gives the view one settle cycle. Not configurable.
pub const FOCUS_DELAY: Duration = Duration::from_millis(100);

/// A focusable control inside a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusControl {
    Default,
    Accept,
    Cancel,
}

/// Controls tried for initial focus, first present wins.
const FOCUS_PRIORITY: [FocusControl; 3] = [
    FocusControl::Default,
    FocusControl::Accept,
    FocusControl::Cancel,
];

impl FocusControl {
    pub const fn button(self) -> OverlayButtons {
        match self {
            Self::Default => OverlayButtons::DEFAULT,
            Self::Accept => OverlayButtons::ACCEPT,
            Self::Cancel => OverlayButtons::CANCEL,
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Accept => "accept",
            Self::Cancel => "cancel",
        }
    }
}

/// Address of a control: which dialog layer, which button.
///
/// Renders as `overlay-<control>-btn-<depth>`, the element id a DOM-like
/// host would use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusTarget {
    pub depth: usize,
    pub control: FocusControl,
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay-{}-btn-{}", self.control.slug(), self.depth)
    }
}

/// Pick the control that receives focus when a dialog settles.
pub fn initial_focus(buttons: OverlayButtons) -> Option<FocusControl> {
    FOCUS_PRIORITY
        .into_iter()
        .find(|control| buttons.contains(control.button()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_beats_accept_and_cancel() {
        let all = OverlayButtons::all();
        assert_eq!(initial_focus(all), Some(FocusControl::Default));
    }

    #[test]
    fn accept_beats_cancel() {
        let buttons = OverlayButtons::ACCEPT | OverlayButtons::CANCEL;
        assert_eq!(initial_focus(buttons), Some(FocusControl::Accept));
    }

    #[test]
    fn cancel_alone() {
        assert_eq!(
            initial_focus(OverlayButtons::CANCEL),
            Some(FocusControl::Cancel)
        );
    }

    #[test]
    fn no_controls_no_focus() {
        assert_eq!(initial_focus(OverlayButtons::empty()), None);
    }

    #[test]
    fn target_ids() {
        let target = FocusTarget {
            depth: 2,
            control: FocusControl::Accept,
        };
        assert_eq!(target.to_string(), "overlay-accept-btn-2");
    }
}
