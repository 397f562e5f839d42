//! Adapter utilities for the `lazyreveal` crate.
//!
//! The `lazyreveal` crate is UI-agnostic and focuses on the core geometry and
//! state machine. This crate provides small, framework-neutral helpers
//! commonly needed by adapters:
//!
//! - An environment seam ([`ScrollHost`]) for the window-equivalent that
//!   owns scroll/resize signals and listener registration
//! - A shared scroll tracker that rate-limits one signal stream and fans it
//!   out to any number of revealers, acquiring and releasing the host's
//!   listener slot with tracker occupancy
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod host;
mod tracker;


pub use host::ScrollHost;
pub use tracker::{ScrollTracker, TrackedId, tracking_required};
