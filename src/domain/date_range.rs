//! # Date Range Counter
//!
//! This module contains the core state of the app: two optional date bounds
//! and the day count derived from them. The UI only handles presentation
//! concerns, while the selection handlers, the ordering affordance and the
//! count computation all live here.
//!
//! ## Key Type:
//! - `DateRangeCounter` - selection state plus the derived day count
//!
//! ## The ±1-day offset:
//! The stored `min_date` is one day AFTER the date the user picked, and the
//! stored `max_date` is one day BEFORE. The displayed values undo the offset,
//! so what the user picked round-trips exactly. The point of the indirection
//! is that the stored values can be handed to the opposite picker as its
//! selectable bound with no off-by-one: the end picker's lower bound is
//! `min_date` itself, which is already "strictly after the picked start".

use chrono::NaiveDate;
use log::debug;

/// Selection state for the two date pickers and the count derived from them.
///
/// All operations are total: an absent date is a valid state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeCounter {
    /// Picked start date, stored offset forward by one day
    min_date: Option<NaiveDate>,

    /// Picked end date, stored offset backward by one day
    max_date: Option<NaiveDate>,

    /// Whole days between the two displayed dates; present iff both bounds are
    day_count: Option<i64>,
}

impl DateRangeCounter {
    /// Create a counter with nothing selected yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a selection event from the start picker.
    ///
    /// `None` (the picker reporting no selection) is a no-op.
    pub fn select_start(&mut self, date: Option<NaiveDate>) {
        if let Some(picked) = date {
            // succ_opt only fails at the edge of the representable calendar
            if let Some(stored) = picked.succ_opt() {
                self.min_date = Some(stored);
                debug!("📅 Start selected: {} (stored as {})", picked, stored);
                self.recompute();
            }
        }
    }

    /// Handle a selection event from the end picker.
    ///
    /// `None` is a no-op, same as for the start picker.
    pub fn select_end(&mut self, date: Option<NaiveDate>) {
        if let Some(picked) = date {
            if let Some(stored) = picked.pred_opt() {
                self.max_date = Some(stored);
                debug!("📅 End selected: {} (stored as {})", picked, stored);
                self.recompute();
            }
        }
    }

    /// The date the start picker should show: exactly what the user picked
    pub fn displayed_start(&self) -> Option<NaiveDate> {
        self.min_date.and_then(|d| d.pred_opt())
    }

    /// The date the end picker should show: exactly what the user picked
    pub fn displayed_end(&self) -> Option<NaiveDate> {
        self.max_date.and_then(|d| d.succ_opt())
    }

    /// Lower bound for the end picker. Already one past the picked start,
    /// so "at or after the bound" means "strictly after the start".
    pub fn end_lower_bound(&self) -> Option<NaiveDate> {
        self.min_date
    }

    /// Upper bound for the start picker, symmetric to `end_lower_bound`
    pub fn start_upper_bound(&self) -> Option<NaiveDate> {
        self.max_date
    }

    /// Number of whole days between the two displayed dates, if both are set
    pub fn day_count(&self) -> Option<i64> {
        self.day_count
    }

    /// Recompute the derived day count from the current bounds.
    ///
    /// Called at the end of every mutating operation rather than through any
    /// reactive machinery, so the state is always coherent when a frame is
    /// rendered. Absolute value keeps the count non-negative even if a
    /// free-text entry produced an out-of-order pair (see `date_pickers`).
    pub fn recompute(&mut self) {
        self.day_count = match (self.displayed_start(), self.displayed_end()) {
            (Some(start), Some(end)) => Some((end - start).num_days().abs()),
            _ => None,
        };
    }

    /// Clear both bounds and the derived count. Always succeeds.
    ///
    /// Device class is deliberately not part of this state: it is derived
    /// from the environment, not from user input, and survives a reset.
    pub fn reset(&mut self) {
        self.min_date = None;
        self.max_date = None;
        self.day_count = None;
        debug!("📅 Counter reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_counter_has_nothing_selected() {
        let counter = DateRangeCounter::new();
        assert_eq!(counter.displayed_start(), None);
        assert_eq!(counter.displayed_end(), None);
        assert_eq!(counter.day_count(), None);
    }

    #[test]
    fn test_selected_dates_round_trip_through_offset() {
        let mut counter = DateRangeCounter::new();
        let start = date(2024, 3, 5);
        let end = date(2024, 3, 20);

        counter.select_start(Some(start));
        counter.select_end(Some(end));

        // Displayed values must be exactly what was picked
        assert_eq!(counter.displayed_start(), Some(start));
        assert_eq!(counter.displayed_end(), Some(end));
    }

    #[test]
    fn test_stored_bounds_are_offset_by_one_day() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 3, 5)));
        counter.select_end(Some(date(2024, 3, 20)));

        // The bounds handed to the opposite picker carry the offset
        assert_eq!(counter.end_lower_bound(), Some(date(2024, 3, 6)));
        assert_eq!(counter.start_upper_bound(), Some(date(2024, 3, 19)));
    }

    #[test]
    fn test_day_count_for_first_ten_days_of_january() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 1, 1)));
        counter.select_end(Some(date(2024, 1, 10)));

        assert_eq!(counter.day_count(), Some(9));
    }

    #[test]
    fn test_day_count_across_leap_day() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 2, 28)));
        counter.select_end(Some(date(2024, 3, 1)));

        assert_eq!(counter.day_count(), Some(2));
    }

    #[test]
    fn test_no_count_while_end_is_unset() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 1, 1)));

        assert_eq!(counter.day_count(), None);
    }

    #[test]
    fn test_no_count_while_start_is_unset() {
        let mut counter = DateRangeCounter::new();
        counter.select_end(Some(date(2024, 1, 10)));

        assert_eq!(counter.day_count(), None);
    }

    #[test]
    fn test_absent_selection_is_a_no_op() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 1, 1)));
        counter.select_end(Some(date(2024, 1, 10)));

        counter.select_start(None);
        counter.select_end(None);

        assert_eq!(counter.displayed_start(), Some(date(2024, 1, 1)));
        assert_eq!(counter.displayed_end(), Some(date(2024, 1, 10)));
        assert_eq!(counter.day_count(), Some(9));
    }

    #[test]
    fn test_reselecting_start_recomputes_count() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 1, 1)));
        counter.select_end(Some(date(2024, 1, 10)));
        assert_eq!(counter.day_count(), Some(9));

        counter.select_start(Some(date(2024, 1, 5)));
        assert_eq!(counter.day_count(), Some(5));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 1, 1)));
        counter.select_end(Some(date(2024, 1, 10)));

        counter.reset();

        assert_eq!(counter.displayed_start(), None);
        assert_eq!(counter.displayed_end(), None);
        assert_eq!(counter.day_count(), None);
    }

    #[test]
    fn test_reset_on_fresh_counter_succeeds() {
        let mut counter = DateRangeCounter::new();
        counter.reset();
        assert_eq!(counter.day_count(), None);
    }

    #[test]
    fn test_out_of_order_pair_still_yields_non_negative_count() {
        // Free-text entry on non-mobile can bypass the picker bounds; the
        // count must stay non-negative and nothing may panic.
        let mut counter = DateRangeCounter::new();
        counter.select_start(Some(date(2024, 1, 10)));
        counter.select_end(Some(date(2024, 1, 1)));

        assert_eq!(counter.day_count(), Some(9));
    }
}
