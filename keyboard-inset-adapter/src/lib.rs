//! Adapter utilities for the `keyboard-inset` crate.
//!
//! The `keyboard-inset` crate is UI-agnostic and focuses on the geometry and state machine. This
//! crate provides the framework-neutral runtime pieces a webview adapter needs around it:
//!
//! - Idempotent listener registration (`ensure_input_visibility` / `remove_listeners`)
//! - A timer queue for the settle and refocus delays
//! - Tween-based native scroll animation
//!
//! This crate is intentionally framework-agnostic (no webview bindings); the host implements
//! [`Host`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod session;
mod timer;
mod tween;

#[cfg(test)]
mod tests;

pub use host::{Host, ListenerKind};
pub use session::Session;
pub use timer::Timers;
pub use tween::{Easing, Tween};
