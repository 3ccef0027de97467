#![forbid(unsafe_code)]

//! Application-wide loading indicator.
//!
//! A boolean flag that views subscribe to in order to show or hide a
//! spinner. Setting the current value again does not notify.

use crate::reactive::{Observable, Subscription};

#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    state: Observable<bool>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the indicator.
    pub fn set_loading(&self, loading: bool) {
        if self.state.get() != loading {
            tracing::debug!(loading, "loading indicator changed");
        }
        self.state.set(loading);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.get()
    }

    /// Run `callback` with the new value after every change.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> Subscription {
        self.state.subscribe(move |loading| callback(*loading))
    }

    /// The underlying observable, for composing with other bindings.
    pub fn observable(&self) -> &Observable<bool> {
        &self.state
    }
}
