use eframe::egui;

use crate::state::StripesState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StripesApp {
    pub state: StripesState,
}

impl StripesApp {
    pub fn new(state: StripesState) -> Self {
        Self { state }
    }
}

impl eframe::App for StripesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(&self.state.title);
                });
            });

        // ---- Central panel: strip ----
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                plot::stripes_plot(ui, &self.state);
            });
    }
}
