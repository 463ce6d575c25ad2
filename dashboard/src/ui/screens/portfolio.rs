//! # Portfolio Screen
//!
//! Holdings table for the connected wallet or a watched address.

use crate::app::{AppState, Loadable, PortfolioTarget, Route, UiAction};
use crate::ui::theme::palette;
use egui::RichText;
use lib_utils::{format_usd, short_address};

pub fn render_portfolio(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.add_space(16.0);
    ui.heading("Portfolio");

    match state.portfolio_target() {
        PortfolioTarget::None => {
            ui.add_space(24.0);
            ui.label("Please connect your wallet");
            return;
        }
        PortfolioTarget::Owner(owner) => {
            let watched = matches!(state.route, Route::PortfolioAddress(_));
            let suffix = if watched { " (watch-only)" } else { "" };
            ui.label(RichText::new(format!("{}{}", short_address(&owner.to_string()), suffix)).small());
        }
        PortfolioTarget::Invalid => {}
    }
    ui.add_space(12.0);

    match &state.portfolio.view {
        Loadable::Idle | Loadable::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading portfolio...");
            });
        }
        Loadable::Failed(message) => {
            ui.colored_label(palette(state.settings.theme).negative, message);
        }
        Loadable::Loaded(snapshot) if snapshot.entries.is_empty() => {
            ui.label("No assets found");
        }
        Loadable::Loaded(snapshot) => {
            egui::Grid::new("portfolio_table")
                .num_columns(3)
                .striped(true)
                .spacing([32.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Token").strong());
                    ui.label(RichText::new("Amount").strong());
                    ui.label(RichText::new("Value").strong());
                    ui.end_row();

                    for entry in &snapshot.entries {
                        if ui.link(entry.label()).on_hover_text(&entry.mint).clicked() {
                            actions.push(UiAction::Navigate(Route::Token(entry.mint.clone())));
                        }
                        ui.label(entry.amount_display());
                        ui.label(entry.value_display());
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.label(format!("Tokens Found: {}", snapshot.entries.len()));
            ui.label(RichText::new(format!("Total: {}", format_usd(Some(snapshot.total_value())))).strong());
            ui.label(
                RichText::new(format!("Updated {}", snapshot.fetched_at.format("%H:%M:%S UTC"))).small(),
            );
        }
    }
}
