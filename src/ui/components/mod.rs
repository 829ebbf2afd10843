//! # UI Components Module
//!
//! This module organizes all UI components for the days counter application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `header` - Application title and subtitle
//! - `date_pickers` - The two date pickers with bound checks and text entry
//! - `count_display` - Derived day count and the reset control
//! - `styling` - Visual styling, colors, and the display-string constants

pub mod count_display;
pub mod date_pickers;
pub mod header;
pub mod styling;

pub use styling::setup_form_style;
