//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on state and timing math. This crate provides
//! the small, framework-neutral pieces every host needs on top of it:
//!
//! - Input mapping (controls and arrow keys resolve to the same navigation)
//! - A deferred-callback queue for the delayed content swap
//! - An output [`Surface`] trait and a [`Page`] that wires everything together
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod input;
mod page;
mod surface;
mod timer;


pub use input::{Input, Key, Navigation};
pub use page::{CounterPhase, Page};
pub use surface::Surface;
pub use timer::TimerQueue;
