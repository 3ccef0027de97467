#![forbid(unsafe_code)]

//! Reactive values for scrim.
//!
//! - [`Observable`]: a shared, version-tracked value with change
//!   notification via subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//!
//! Used for flags a view layer mirrors, such as the
//! [`LoadingIndicator`](crate::LoadingIndicator) spinner. Everything lives on
//! the UI thread behind `Rc<RefCell<..>>`; subscribers are held weakly and
//! pruned on the next `set`.
//!
//! # Invariants
//!
//! - `version()` counts changes, so a spinner that re-renders on version
//!   never redraws for a repeated `set_loading(true)`.
//! - Callbacks run in subscription order, after the new value is stored.
//! - A callback may call `set` on the observable that invoked it.

pub mod observable;

pub use observable::{Observable, Subscription};
