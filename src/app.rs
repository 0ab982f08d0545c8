use std::time::Instant;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AnemiaRaceApp {
    pub state: AppState,
    last_tick: Instant,
}

impl AnemiaRaceApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            last_tick: Instant::now(),
        }
    }

    /// Record the outcome of building the current frame. Returns whether the
    /// status changed; a persistent failure is logged once.
    fn note_render_result(&mut self, error: Option<String>) -> bool {
        if error == self.state.status_message {
            return false;
        }
        if let Some(msg) = &error {
            log::error!("Cannot draw frame: {msg}");
        }
        self.state.status_message = error;
        true
    }
}

impl eframe::App for AnemiaRaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.driver.advance(now - self.last_tick);
        self.last_tick = now;

        // Build before any panel is drawn so the status strip matches the chart.
        let scene = self.state.current_scene();
        let error = match &scene {
            Some(Err(e)) => Some(format!("Error: {e}")),
            _ => None,
        };
        self.note_render_result(error);

        // ---- Top panel: status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| match &scene {
            Some(Ok(scene)) => plot::race_plot(ui, scene),
            Some(Err(_)) => {
                let msg = self.state.status_message.as_deref().unwrap_or_default();
                panels::centered_message(ui, msg);
            }
            None => panels::centered_message(ui, "No years to animate"),
        });

        ctx.request_repaint_after(self.state.driver.until_next());
    }
}
