//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the days counter app.
//!
//! ## Key Types:
//! - `DaysCounterApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app from an eframe creation context
//! - `reset_form()` - Clear the whole form back to its startup state
//!
//! ## State Management:
//! The DaysCounterApp struct holds all application state in one place: the
//! domain counter, the injected device class, and the purely presentational
//! bits (picker buffers, free-text entry buffers, the feedback message).
//! Everything the user can change goes through the counter's operations;
//! the rest is derived each frame.

use chrono::{Local, NaiveDate};
use log::info;

use crate::domain::date_range::DateRangeCounter;
use crate::domain::device::DeviceClass;

/// Main application struct for the egui days counter
pub struct DaysCounterApp {
    /// Selection state and derived day count
    pub counter: DateRangeCounter,

    /// Mobile/non-mobile classification, detected once in `main` and
    /// injected here; never changes for the lifetime of the session
    pub device_class: DeviceClass,

    // Picker state. The calendar widget always needs a date to stand on,
    // even before the user has selected anything.
    pub start_buffer: NaiveDate,
    pub end_buffer: NaiveDate,

    // Form states (free-text entry, non-mobile only)
    pub start_text: String,
    pub end_text: String,

    // UI state
    pub error_message: Option<String>,
}

impl DaysCounterApp {
    /// Create a new DaysCounterApp with nothing selected
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        device_class: DeviceClass,
    ) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing DaysCounterApp (device class: {:?})", device_class);

        // Apply the global style once; it never changes afterwards
        crate::ui::components::styling::setup_form_style(&cc.egui_ctx);

        let today = Local::now().date_naive();

        Ok(Self {
            counter: DateRangeCounter::new(),
            device_class,
            start_buffer: today,
            end_buffer: today,
            start_text: String::new(),
            end_text: String::new(),
            error_message: None,
        })
    }

    /// Clear any feedback message
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }

    /// Set the feedback message shown under the pickers
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Reset the whole form: counter state, picker buffers, text entries.
    /// The device class stays, it is environment-derived, not user-derived.
    pub fn reset_form(&mut self) {
        self.counter.reset();
        let today = Local::now().date_naive();
        self.start_buffer = today;
        self.end_buffer = today;
        self.start_text.clear();
        self.end_text.clear();
        self.clear_messages();
        info!("🔄 Form reset");
    }
}
