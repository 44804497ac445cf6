//! A headless paging core for infinitely looping carousels.
//!
//! For surface-side utilities (pixel offsets, page snapping, animations), see the
//! `carousel-adapter` crate.
//!
//! A finite item set of length `N` is presented as `N * M` virtual pages. The surface scrolls
//! through virtual pages; the core maps every virtual page back to its real item
//! (`virtual % N`), seeds the viewer in the middle of the range, and silently re-centers it
//! before it can run out of pages. Autoplay advances are routed through the same settle path as
//! user gestures, so the virtual index has exactly one writer.
//!
//! It is UI-agnostic. A rendering surface is expected to:
//! - present [`PagingController::slot_count`] pages and ask [`PagingController::resolve_page_index`]
//!   which item each page shows
//! - report first display, drag start/end and settle positions
//! - execute the [`SurfaceCommand`]s it drains from the controller
//! - feed its clock to [`PagingController::tick`] to drive autoplay
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binder;
mod options;
mod paging;
mod space;
mod state;
mod timer;
mod types;


pub use binder::{BindTicket, ContentBinder};
pub use options::CarouselOptions;
pub use paging::PagingController;
pub use space::{DEFAULT_MULTIPLIER, MIN_MULTIPLIER, VirtualIndexSpace};
pub use state::CarouselState;
pub use timer::{AutoplayTimer, DEFAULT_AUTOPLAY_INTERVAL_MS};
pub use types::{AutoplayState, CarouselEvent, Generation, Phase, SurfaceCommand};
