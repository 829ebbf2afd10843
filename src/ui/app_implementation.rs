//! # App Implementation Module
//!
//! The `eframe::App` impl for the days counter: one central panel holding
//! the header, the two picker rows, the feedback line and the count section.
//! Every state transition happens synchronously inside `update`; there is no
//! background work and nothing to cancel.

use eframe::egui;

use crate::ui::app_state::DaysCounterApp;
use crate::ui::components::styling::colors;

impl eframe::App for DaysCounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();
            ui.add_space(12.0);

            self.render_date_pickers(ui);

            self.render_messages(ui);

            ui.add_space(12.0);

            self.render_count_section(ui);
        });
    }
}

impl DaysCounterApp {
    /// Render the feedback line under the pickers
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.vertical_centered(|ui| {
                ui.colored_label(colors::ERROR_TEXT, format!("❌ {}", error));
            });
        }
    }
}
