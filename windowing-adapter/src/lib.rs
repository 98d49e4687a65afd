//! Adapter utilities for the `windowing` crate.
//!
//! The `windowing` crate is UI-agnostic and focuses on the core math. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - A scroll observer (latest reading wins, `is_scrolling` debouncing)
//! - Tween-based smooth scrolling helpers (optional; adapter-driven)
//! - Scroll anchoring (insert above the viewport without visual jumps)
//! - An explicit store for parking view state between mounts
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod observer;
mod state;
mod target;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::Controller;
pub use observer::{ScrollDirection, ScrollObserver};
pub use state::{FrameState, MemoryStore, ScrollState, ViewStateStore};
pub use target::ScrollTarget;
pub use tween::{Easing, Tween};
