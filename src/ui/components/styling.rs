//! # Styling Module
//!
//! This module contains the styling setup, color constants and display
//! strings for the days counter app.
//!
//! ## Key Functions:
//! - `setup_form_style()` - Configure global egui styling for the form
//!
//! ## Purpose:
//! Keeps all presentation constants in one place. The `strings` module is
//! the app's entire localization surface: every user-visible string that is
//! not derived from state lives there.

use eframe::egui;

/// Setup the global style for the single-screen form
pub fn setup_form_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Make text edits visibly recessed next to the picker buttons
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 248, 248);

        // Larger text for a form that holds exactly three widgets
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(28.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and breathing room
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Color constants for the form
pub mod colors {
    use eframe::egui::Color32;

    pub const TITLE_TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    pub const SUBTITLE_TEXT: Color32 = Color32::from_rgb(100, 100, 100);
    pub const COUNT_TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    pub const ERROR_TEXT: Color32 = Color32::from_rgb(196, 43, 28);
}

/// Display strings for the form (the localization surface)
pub mod strings {
    /// Window and header title
    pub const TITLE: &str = "Days counter v2 📅";

    /// Subtitle under the header
    pub const SUBTITLE: &str = "A simple app to count the number of days between two dates. \
        The first date must be before the second date.";

    /// Labels for the two picker rows
    pub const START_LABEL: &str = "Start date";
    pub const END_LABEL: &str = "End date";

    /// Shown by a picker before anything is selected
    pub const DATE_PLACEHOLDER: &str = "Select a date...";

    /// Shown when a pick falls outside the configured bounds
    pub const DATES_OUT_OF_BOUNDS: &str = "Dates must be one after the other";

    /// Shown when free-text entry is not a parseable date
    pub const INVALID_DATE: &str = "Enter the date as YYYY-MM-DD";

    /// Hint for free-text entry on non-mobile devices
    pub const TEXT_ENTRY_HINT: &str = "YYYY-MM-DD";

    /// Caption of the reset control
    pub const RESET: &str = "Reset";

    /// Format accepted by free-text entry and used by the picker buttons
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}
