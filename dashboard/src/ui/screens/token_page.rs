//! # Token Page
//!
//! Details of a single token looked up by mint address.

use crate::app::{AppState, Loadable, UiAction};
use crate::ui::theme::palette;
use egui::RichText;

pub fn render_token_page(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.add_space(16.0);
    match &state.token_page.view {
        Loadable::Idle | Loadable::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading token...");
            });
        }
        Loadable::Failed(message) => {
            ui.heading("Token");
            ui.colored_label(palette(state.settings.theme).negative, message);
            ui.label(RichText::new(&state.token_page.address).small().monospace());
        }
        Loadable::Loaded(token) => {
            ui.heading(format!("{} ({})", token.name, token.symbol));
            ui.add_space(8.0);
            egui::Grid::new("token_details").num_columns(2).spacing([24.0, 6.0]).show(ui, |ui| {
                ui.label("Address");
                ui.label(RichText::new(&token.address).monospace());
                ui.end_row();

                ui.label("Decimals");
                ui.label(token.decimals.to_string());
                ui.end_row();

                if let Some(logo) = &token.logo_uri {
                    ui.label("Logo");
                    if ui.link(logo).clicked() {
                        actions.push(UiAction::OpenExternal(logo.clone()));
                    }
                    ui.end_row();
                }

                if !token.tags.is_empty() {
                    ui.label("Tags");
                    ui.label(token.tags.join(", "));
                    ui.end_row();
                }
            });
        }
    }
}
