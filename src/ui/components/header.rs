//! # Header Module
//!
//! This module renders the application header: the title line and the
//! one-sentence explanation of what the form does.

use eframe::egui;

use crate::ui::app_state::DaysCounterApp;
use crate::ui::components::styling::{colors, strings};

impl DaysCounterApp {
    /// Render the title and subtitle
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            // Proportional font so the emoji in the title renders
            ui.add(
                egui::Label::new(
                    egui::RichText::new(strings::TITLE)
                        .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TITLE_TEXT),
                )
                .selectable(false),
            );

            ui.add_space(4.0);

            ui.add(
                egui::Label::new(
                    egui::RichText::new(strings::SUBTITLE)
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(colors::SUBTITLE_TEXT),
                )
                .selectable(false),
            );
        });
    }
}
