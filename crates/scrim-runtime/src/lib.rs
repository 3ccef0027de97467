#![forbid(unsafe_code)]

//! Runtime pieces for scrim: change-tracked values, deferred tasks, and the
//! loading indicator.
//!
//! Everything here is single-threaded and event-loop shaped. Nothing blocks
//! and nothing spawns; time only moves when the caller advances it.

pub mod loading;
pub mod reactive;
pub mod timer;

pub use loading::LoadingIndicator;
pub use reactive::{Observable, Subscription};
pub use timer::{DeferredQueue, FrameClock};
