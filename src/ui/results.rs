// src/ui/results.rs
use eframe::egui;
use crate::catalog::Recommendation;

pub const NO_MATCHES: &str = "Unfortunately no products match your criteria.\n\
Please remove one or more feature requirements and try again.";

/// One "name - {currency}{price}" line per match with the price to two
/// decimals, or the no-match advice.
pub fn format_recommendations(matches: &[Recommendation<'_>], currency: &str) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    matches.iter()
        .map(|m| format!("{} - {}{:.2}", m.name, currency, m.price))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show_results(ui: &mut egui::Ui, results: Option<&str>) {
    let mut text = results.unwrap_or("");
    ui.add_sized(
        [ui.available_width(), 120.0],
        egui::TextEdit::multiline(&mut text)
            .desired_rows(6)
    );
}
