#![forbid(unsafe_code)]

//! Named exit animations.
//!
//! Closing an overlay asks the view host to play two animations at once: a
//! translate-out on the dialog body and a fade-out on the whole layer. The
//! host reports each completion by name. Only the *terminal* animation, the
//! one with the longest declared duration, detaches the overlay; every other
//! completion is ignored. With default timings the terminal animation is
//! `fade-out`.
//!
//! # Invariants
//!
//! - Exactly one animation of an [`ExitTransition`] is terminal.
//! - On equal durations `fade-out` wins, so the default rule is stable.

use std::time::Duration;

use crate::timings::OverlayTimings;

/// Animation name for the dialog body sliding out.
pub const TRANSLATE_OUT: &str = "translate-out";

/// Animation name for the layer fading out.
pub const FADE_OUT: &str = "fade-out";

/// A single named animation with its declared duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitAnimation {
    pub name: &'static str,
    pub duration: Duration,
}

impl ExitAnimation {
    pub const fn new(name: &'static str, duration: Duration) -> Self {
        Self { name, duration }
    }
}

/// The pair of animations played when an overlay closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitTransition {
    translate: ExitAnimation,
    fade: ExitAnimation,
}

impl Default for ExitTransition {
    fn default() -> Self {
        Self::new(&OverlayTimings::default())
    }
}

impl ExitTransition {
    /// Build the transition from declared timings.
    pub fn new(timings: &OverlayTimings) -> Self {
        Self {
            translate: ExitAnimation::new(TRANSLATE_OUT, timings.translate_out),
            fade: ExitAnimation::new(FADE_OUT, timings.fade_out),
        }
    }

    /// Both animations, in the order they are handed to the host.
    pub fn animations(&self) -> [ExitAnimation; 2] {
        [self.translate, self.fade]
    }

    /// The animation whose completion detaches the overlay.
    pub fn terminal(&self) -> ExitAnimation {
        if self.translate.duration > self.fade.duration {
            self.translate
        } else {
            self.fade
        }
    }

    /// Whether a completion event with `name` ends the transition.
    #[inline]
    pub fn is_terminal(&self, name: &str) -> bool {
        self.terminal().name == name
    }

    /// Wall time until the overlay detaches, assuming the host honours the
    /// declared durations.
    pub fn total(&self) -> Duration {
        self.terminal().duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_terminal_is_fade() {
        let transition = ExitTransition::default();
        assert_eq!(transition.terminal().name, FADE_OUT);
        assert_eq!(transition.total(), Duration::from_millis(400));
        assert!(transition.is_terminal(FADE_OUT));
        assert!(!transition.is_terminal(TRANSLATE_OUT));
    }

    #[test]
    fn longer_translate_becomes_terminal() {
        let timings = OverlayTimings::default().translate_out(Duration::from_millis(900));
        let transition = ExitTransition::new(&timings);
        assert_eq!(transition.terminal().name, TRANSLATE_OUT);
        assert!(!transition.is_terminal(FADE_OUT));
    }

    #[test]
    fn tie_goes_to_fade() {
        let timings = OverlayTimings::default()
            .translate_out(Duration::from_millis(250))
            .fade_out(Duration::from_millis(250));
        assert_eq!(ExitTransition::new(&timings).terminal().name, FADE_OUT);
    }

    #[test]
    fn unknown_name_is_not_terminal() {
        assert!(!ExitTransition::default().is_terminal("spin-out"));
    }

    #[test]
    fn animations_carry_declared_durations() {
        let [translate, fade] = ExitTransition::default().animations();
        assert_eq!(translate, ExitAnimation::new(TRANSLATE_OUT, Duration::from_millis(300)));
        assert_eq!(fade, ExitAnimation::new(FADE_OUT, Duration::from_millis(400)));
    }
}
