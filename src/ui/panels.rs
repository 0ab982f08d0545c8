use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::scale::ScalePolicy;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – read-only status line
// ---------------------------------------------------------------------------

/// Render the status strip above the chart.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} records, {} countries",
            state.dataset.len(),
            state.colors.len()
        ));

        ui.separator();

        if let Some(year) = state.driver.current_year() {
            ui.label(format!(
                "Year {year}  ({}/{})",
                state.driver.position() + 1,
                state.driver.frame_count()
            ));
        }

        ui.separator();

        let policy = match state.policy {
            ScalePolicy::Global => "Global scale".to_string(),
            ScalePolicy::PerFrame { lower_bound } => format!("Per-frame scale from {lower_bound}"),
        };
        ui.label(policy);

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Placeholder shown instead of a chart
// ---------------------------------------------------------------------------

pub fn centered_message(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(egui::RichText::new(text).color(Color32::DARK_RED));
    });
}
