//! # Domain Module
//!
//! Business logic for the days counter, kept out of the UI layer so it can
//! be tested without an egui event loop.
//!
//! ## Module Organization:
//! - `date_range` - The DateRangeCounter component (selection state + derived day count)
//! - `device` - One-shot mobile/non-mobile classification of the runtime device

pub mod date_range;
pub mod device;
