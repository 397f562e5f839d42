//! A headless lazy-reveal visibility engine for scrollable documents.
//!
//! For adapter-level utilities (shared window-scroll tracking), see the
//! `lazyreveal-adapter` crate.
//!
//! This crate decides exactly once when a placeholder region enters a
//! threshold-expanded viewport and runs the one-way placeholder → content
//! transition: document-space bounding boxes, the expanded intersection test,
//! a monotonic visibility state machine, and debounce/throttle gating for
//! high-frequency scroll input.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - viewport dimensions and scroll offsets (or a native intersection driver)
//! - a probe that measures the placeholder element
//! - lifecycle calls (`on_mount`/`on_update`/`on_unmount`) at the
//!   corresponding points of its own lifecycle
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod effect;
mod geometry;
mod options;
mod revealer;
mod source;
mod types;
mod watcher;


pub use effect::{WrapperEffect, wrapper_effect};
pub use geometry::{BoundingBox, ClientRect, Margins, PlaceholderGeometry, Viewport};
pub use options::{PlaceholderProbe, RevealCallback, RevealerOptions};
pub use revealer::Revealer;
pub use source::{DelayGate, ScrollSource};
pub use types::{DelayMethod, ObservationStrategy, ScrollPosition, ViewportSize, VisibilityState};
pub use watcher::IntersectionDriver;
