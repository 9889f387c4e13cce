//! Headless auto-scroll: keep an anchored element in view whenever some dependencies change.
//!
//! For a headless scroll container with tween-driven smooth scrolling, see the
//! `auto-scroll-adapter` crate.
//!
//! The crate owns no UI objects. A host framework is expected to provide:
//! - anchor allocation scoped to a component instance ([`AnchorProvider`])
//! - "run after render when these inputs changed" scheduling ([`EffectScheduler`])
//! - the element's scroll primitive ([`ScrollIntoView`])
//!
//! [`Scope`] is a small reference host that implements the first two for headless use.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod effect;
mod element;
mod hook;
mod host;
mod options;
mod scope;
mod types;

#[cfg(test)]
mod tests;

pub use anchor::Anchor;
pub use effect::AutoScrollEffect;
pub use element::ScrollIntoView;
pub use hook::{use_auto_scroll, use_auto_scroll_once, use_auto_scroll_with};
pub use host::{AnchorProvider, Deps, EffectScheduler, Host};
pub use options::AutoScrollOptions;
pub use scope::Scope;
pub use types::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
