//! A headless testimonial carousel engine.
//!
//! For host wiring (input mapping, deferred swaps, output surfaces), see the `carousel-adapter`
//! crate.
//!
//! This crate owns the parts of a testimonial slider that carry state: a validated, read-only
//! testimonial list, a wraparound slide cursor, the two-phase slide transition (hide, then swap
//! content after a fixed delay) guarded by generation tokens, and a one-shot counter animator.
//!
//! It is UI-agnostic and never reads a clock. A host layer is expected to provide:
//! - input signals (next/previous/jump)
//! - `now_ms` timestamps from its event loop
//! - a timer that hands deferred swaps back once they are due
//! - a refresh callback that drives the counter
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod counter;
mod cursor;
mod error;
mod options;
mod state;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use controller::{
    Generation, PendingSwap, SlideController, TransitionStart, track_offset_percent,
};
pub use counter::{CounterAnimator, CounterFrame, Easing};
pub use cursor::SlideCursor;
pub use error::{Field, StoreError};
pub use options::{
    CarouselOptions, CounterOptions, DEFAULT_HIDDEN_OFFSET_PX, DEFAULT_TRANSITION_DELAY_MS,
};
pub use state::CarouselState;
pub use store::TestimonialStore;
pub use types::{
    Block, BlockStyle, IndexLabel, SlideView, Testimonial, Visibility, format_index_label,
};
