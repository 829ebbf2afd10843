//! # Count Display Module
//!
//! This module renders the derived day count and the reset control.
//!
//! ## Display rule:
//! The count line reads "There are N days between the two dates" once both
//! dates are selected; until then it shows a literal `0`, same as the
//! original form did.

use eframe::egui;

use crate::ui::app_state::DaysCounterApp;
use crate::ui::components::styling::{colors, strings};

impl DaysCounterApp {
    /// Render the count line and the reset button
    pub fn render_count_section(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let text = match self.counter.day_count() {
                Some(count) => {
                    format!("There are {} days between the two dates", count)
                }
                None => "0".to_string(),
            };

            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::COUNT_TEXT),
                )
                .selectable(false),
            );

            ui.add_space(12.0);

            if ui
                .add_sized([120.0, 40.0], egui::Button::new(strings::RESET))
                .clicked()
            {
                self.reset_form();
            }
        });
    }
}
