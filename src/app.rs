// src/app.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::selector::show_selector_view;

pub struct ProductSelectorApp {
    state: AppState,
}

impl ProductSelectorApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ProductSelectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(30.0))
            .show(ctx, |ui| {
                show_selector_view(ui, &mut self.state);
            });
    }
}
