//! Adapter utilities for the `auto-scroll` crate.
//!
//! `auto-scroll` only decides *when* an element should be brought into view. This crate provides
//! a small, framework-neutral place for that request to land:
//!
//! - [`ScrollContainer`]: single-axis scroll state with clamping and alignment math
//! - [`ElementHandle`]: a [`auto_scroll::ScrollIntoView`] implementation over a shared container
//! - [`Tween`]/[`Easing`]: adapter-driven smooth scrolling
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod element;
mod state;
mod tween;


pub use container::ScrollContainer;
pub use element::ElementHandle;
pub use state::{ContainerState, ElementBounds};
pub use tween::{Easing, Tween};
