// src/ui/selector.rs
use eframe::egui;
use crate::catalog::Choice;
use crate::state::AppState;
use crate::ui::results::show_results;

pub fn show_selector_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(state.heading());
    ui.add_space(10.0);

    egui::ScrollArea::vertical()
        .id_source("features_scroll")
        .max_height((ui.available_height() - 220.0).max(120.0))
        .show(ui, |ui| {
            egui::Grid::new("features_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    for (feature, choice) in state.requirements.iter_mut() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(feature);
                        });
                        egui::ComboBox::from_id_source(feature)
                            .selected_text(choice.label())
                            .show_ui(ui, |ui| {
                                ui.selectable_value(choice, Choice::No, "N");
                                ui.selectable_value(choice, Choice::Yes, "Y");
                            });
                        ui.end_row();
                    }
                });
        });

    ui.add_space(20.0);
    if ui.add_sized([ui.available_width(), 24.0], egui::Button::new("Get Recommendations")).clicked() {
        state.generate_results();
    }

    ui.add_space(20.0);
    show_results(ui, state.results.as_deref());

    ui.add_space(20.0);
    if ui.add_sized([ui.available_width(), 24.0], egui::Button::new("Reset All")).clicked() {
        state.reset_all();
    }
}
