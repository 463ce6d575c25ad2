//! # Token Picker
//!
//! Modal list of selectable tokens, filtered by symbol, name or mint.

use crate::app::{AppState, PickerTarget, UiAction};
use lib_utils::short_address;

const MAX_ROWS: usize = 50;

/// Render the picker window when one is open.
pub fn render_token_picker(ctx: &egui::Context, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let Some(target) = state.exchange.picker else {
        return;
    };
    let title = match target {
        PickerTarget::Input => "Select token to pay",
        PickerTarget::Output => "Select token to receive",
    };

    let mut open = true;
    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.exchange.picker_filter)
                    .hint_text("Search by name, symbol or mint")
                    .desired_width(f32::INFINITY),
            );
            ui.separator();

            let matches = state.exchange.tokens.search(&state.exchange.picker_filter, MAX_ROWS);
            if matches.is_empty() {
                ui.label("No tokens match");
            }
            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for token in matches {
                    let label = format!("{}  {}  {}", token.symbol, token.name, short_address(&token.mint));
                    if ui.selectable_label(false, label).clicked() {
                        actions.push(UiAction::SelectToken(target, token.clone()));
                    }
                }
            });
        });

    if !open {
        actions.push(UiAction::ClosePicker);
    }
}
