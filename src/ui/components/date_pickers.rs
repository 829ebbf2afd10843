//! # Date Pickers Module
//!
//! This module renders the two date pickers and owns every rule about what
//! a picker will accept.
//!
//! ## Key Functions:
//! - `render_date_pickers()` - The start and end picker rows
//! - `check_start_pick()` / `check_end_pick()` - Ordering affordance
//! - `parse_text_entry()` - Free-text date parsing (non-mobile only)
//!
//! ## Ordering enforcement:
//! The calendar widget in egui_extras has no min/max date props, so the
//! bound the form configures is enforced here, around the widget: a pick
//! that falls outside the bound is reverted and the fixed out-of-bounds
//! message is shown. The end picker's lower bound is the stored `min_date`
//! (one past the picked start), so "at or after the bound" is exactly
//! "strictly after the start"; the start picker is bounded above the same
//! way. Free-text entry bypasses these checks on purpose, matching the
//! permissive behavior of the original form.

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;
use log::warn;
use thiserror::Error;

use crate::domain::date_range::DateRangeCounter;
use crate::ui::app_state::DaysCounterApp;
use crate::ui::components::styling::strings;

/// Why a date entry was not applied. User feedback, not a failure path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DateEntryError {
    /// The pick falls outside the bound configured by the opposite picker
    #[error("{}", strings::DATES_OUT_OF_BOUNDS)]
    OutOfBounds,

    /// Free-text entry that is not a date in the accepted format
    #[error("{}", strings::INVALID_DATE)]
    Unparseable,
}

/// Check a start pick against the upper bound set by the selected end date
pub fn check_start_pick(
    counter: &DateRangeCounter,
    picked: NaiveDate,
) -> Result<(), DateEntryError> {
    match counter.start_upper_bound() {
        Some(bound) if picked > bound => Err(DateEntryError::OutOfBounds),
        _ => Ok(()),
    }
}

/// Check an end pick against the lower bound set by the selected start date
pub fn check_end_pick(
    counter: &DateRangeCounter,
    picked: NaiveDate,
) -> Result<(), DateEntryError> {
    match counter.end_lower_bound() {
        Some(bound) if picked < bound => Err(DateEntryError::OutOfBounds),
        _ => Ok(()),
    }
}

/// Parse a free-text date entry in the form's accepted format
pub fn parse_text_entry(text: &str) -> Result<NaiveDate, DateEntryError> {
    NaiveDate::parse_from_str(text.trim(), strings::DATE_FORMAT)
        .map_err(|_| DateEntryError::Unparseable)
}

impl DaysCounterApp {
    /// Render both picker rows
    pub fn render_date_pickers(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            self.render_start_row(ui);
            ui.add_space(4.0);
            self.render_end_row(ui);
        });
    }

    fn render_start_row(&mut self, ui: &mut egui::Ui) {
        // Keep the widget in sync with the counter before drawing; a
        // free-text entry may have moved the selection under it
        if let Some(shown) = self.counter.displayed_start() {
            self.start_buffer = shown;
        }

        let selected = self.counter.displayed_start().is_some();
        let mut picked_via_calendar = None;

        ui.horizontal(|ui| {
            ui.label(strings::START_LABEL);

            let response = ui.add(DatePickerButton::new(&mut self.start_buffer).id_source("start_date"));
            if response.changed() {
                picked_via_calendar = Some(self.start_buffer);
            }

            if !self.device_class.is_mobile() {
                self.render_start_text_entry(ui);
            }

            if !selected {
                ui.weak(strings::DATE_PLACEHOLDER);
            }
        });

        if let Some(picked) = picked_via_calendar {
            self.handle_start_pick(picked);
        }
    }

    fn render_end_row(&mut self, ui: &mut egui::Ui) {
        if let Some(shown) = self.counter.displayed_end() {
            self.end_buffer = shown;
        }

        let selected = self.counter.displayed_end().is_some();
        let mut picked_via_calendar = None;

        ui.horizontal(|ui| {
            ui.label(strings::END_LABEL);

            let response = ui.add(DatePickerButton::new(&mut self.end_buffer).id_source("end_date"));
            if response.changed() {
                picked_via_calendar = Some(self.end_buffer);
            }

            if !self.device_class.is_mobile() {
                self.render_end_text_entry(ui);
            }

            if !selected {
                ui.weak(strings::DATE_PLACEHOLDER);
            }
        });

        if let Some(picked) = picked_via_calendar {
            self.handle_end_pick(picked);
        }
    }

    /// Apply a calendar pick from the start picker, enforcing its bound
    fn handle_start_pick(&mut self, picked: NaiveDate) {
        match check_start_pick(&self.counter, picked) {
            Ok(()) => {
                self.counter.select_start(Some(picked));
                self.clear_messages();
            }
            Err(e) => {
                warn!("📅 Start pick {} rejected: {}", picked, e);
                self.start_buffer = self
                    .counter
                    .displayed_start()
                    .unwrap_or_else(|| Local::now().date_naive());
                self.set_error(e.to_string());
            }
        }
    }

    /// Apply a calendar pick from the end picker, enforcing its bound
    fn handle_end_pick(&mut self, picked: NaiveDate) {
        match check_end_pick(&self.counter, picked) {
            Ok(()) => {
                self.counter.select_end(Some(picked));
                self.clear_messages();
            }
            Err(e) => {
                warn!("📅 End pick {} rejected: {}", picked, e);
                self.end_buffer = self
                    .counter
                    .displayed_end()
                    .unwrap_or_else(|| Local::now().date_naive());
                self.set_error(e.to_string());
            }
        }
    }

    fn render_start_text_entry(&mut self, ui: &mut egui::Ui) {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.start_text)
                .hint_text(strings::TEXT_ENTRY_HINT)
                .desired_width(110.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.apply_start_text_entry();
        }
    }

    fn render_end_text_entry(&mut self, ui: &mut egui::Ui) {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.end_text)
                .hint_text(strings::TEXT_ENTRY_HINT)
                .desired_width(110.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.apply_end_text_entry();
        }
    }

    /// Apply a typed start date. No bound check here: free-text entry is
    /// the one path that can produce an out-of-order pair.
    fn apply_start_text_entry(&mut self) {
        if self.start_text.trim().is_empty() {
            return;
        }
        match parse_text_entry(&self.start_text) {
            Ok(date) => {
                self.counter.select_start(Some(date));
                self.clear_messages();
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Apply a typed end date, same rules as the start entry
    fn apply_end_text_entry(&mut self) {
        if self.end_text.trim().is_empty() {
            return;
        }
        match parse_text_entry(&self.end_text) {
            Ok(date) => {
                self.counter.select_end(Some(date));
                self.clear_messages();
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_pick_equal_to_start_is_out_of_bounds() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 3, 1)));

        // The bound requires strictly after, so the same day is rejected
        assert_eq!(
            check_end_pick(&counter, date(2024, 3, 1)),
            Err(DateEntryError::OutOfBounds)
        );
        assert_eq!(counter.day_count(), None);
    }

    #[test]
    fn test_end_pick_one_day_after_start_is_allowed() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 3, 1)));

        assert_eq!(check_end_pick(&counter, date(2024, 3, 2)), Ok(()));
    }

    #[test]
    fn test_end_pick_is_unbounded_without_a_start() {
        let counter = DateRangeCounter::new();
        assert_eq!(check_end_pick(&counter, date(1970, 1, 1)), Ok(()));
    }

    #[test]
    fn test_start_pick_must_be_strictly_before_end() {
        let mut counter = DateRangeCounter::new();
        counter.select_end(Some(date(2024, 3, 10)));

        assert_eq!(check_start_pick(&counter, date(2024, 3, 9)), Ok(()));
        assert_eq!(
            check_start_pick(&counter, date(2024, 3, 10)),
            Err(DateEntryError::OutOfBounds)
        );
        assert_eq!(
            check_start_pick(&counter, date(2024, 3, 11)),
            Err(DateEntryError::OutOfBounds)
        );
    }

    #[test]
    fn test_out_of_bounds_message_text() {
        assert_eq!(
            DateEntryError::OutOfBounds.to_string(),
            "Dates must be one after the other"
        );
    }

    #[test]
    fn test_parse_text_entry_accepts_iso_dates() {
        assert_eq!(parse_text_entry("2024-01-10"), Ok(date(2024, 1, 10)));
        assert_eq!(parse_text_entry("  2024-01-10  "), Ok(date(2024, 1, 10)));
    }

    #[test]
    fn test_parse_text_entry_rejects_garbage() {
        assert_eq!(parse_text_entry("next tuesday"), Err(DateEntryError::Unparseable));
        assert_eq!(parse_text_entry("2024-13-40"), Err(DateEntryError::Unparseable));
        assert_eq!(parse_text_entry(""), Err(DateEntryError::Unparseable));
    }
}
