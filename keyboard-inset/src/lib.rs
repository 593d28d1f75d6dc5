//! A headless engine that keeps a focused text input visible above an on-screen keyboard.
//!
//! For the runtime that registers listeners, runs timers and animates native scrolling, see the
//! `keyboard-inset-adapter` crate.
//!
//! When the keyboard slides up inside a hybrid (webview) app it can cover the focused field. This
//! crate computes how far the surrounding scrollable content has to move so the field stays
//! above the keyboard, keeping a margin, without pushing the field's top out of its container,
//! and undoes the correction when the keyboard goes away.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - read access to the document through [`Dom`] (tree, tags, bounding rects, focus)
//! - keyboard and focus notifications as [`KeyboardEvent`]s
//! - execution of the returned [`Command`]s (CSS transform, animated scroll, focus/blur)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod dom;
mod effect;
mod focus;
mod locate;
mod options;
mod profile;
mod solver;
mod state;
mod types;


pub use controller::{Controller, KeyboardEvent};
pub use dom::Dom;
pub use effect::{Command, Task};
pub use focus::{TEXT_INPUT_TYPES, is_keyboard_focusable, is_keyboard_tag, is_text_input_type};
pub use locate::{SCROLL_CONTENT_TAG, find_ancestor, find_scroll_container};
pub use options::{Config, DEFAULT_MARGIN, KeyboardOptions};
pub use profile::{PlatformProfile, ScrollTiming};
pub use solver::{Constraint, Geometry, Shift, solve};
pub use state::{AdjustmentState, Phase};
pub use types::{Bounds, Direction, Platform, Selection, Strategy, UnknownPlatform};
