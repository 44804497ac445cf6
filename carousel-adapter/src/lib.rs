//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only speaks in virtual page indexes. This crate
//! provides small, framework-neutral helpers for surfaces that scroll in pixels:
//!
//! - [`Pager`]: executes the controller's surface commands, snaps drags to pages, runs page
//!   animations and feeds the autoplay clock
//! - Tween-based animation helpers ([`Tween`], [`Easing`])
//!
//! This crate is intentionally framework-agnostic (no egui/iced bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod pager;
mod tween;


pub use pager::{Pager, PagerOptions};
pub use tween::{Easing, Tween};
