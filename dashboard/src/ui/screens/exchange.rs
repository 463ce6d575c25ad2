//! # Exchange Screen
//!
//! The swap form: source and destination tokens, amounts, rate and the Swap
//! button.

use crate::app::{AppState, PickerTarget, UiAction};
use crate::ui::theme::palette;
use egui::RichText;

pub fn render_exchange(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let colors = *palette(state.settings.theme);
    let can_sign = state.wallet.connector.can_sign();
    let connected = state.wallet.connector.is_connected();
    let devnet = state.services.endpoint.is_devnet();
    let exchange = &mut state.exchange;

    ui.vertical_centered(|ui| {
        ui.set_max_width(440.0);
        ui.add_space(24.0);
        ui.heading("Swap");
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).fill(colors.menu).show(ui, |ui| {
            ui.label("You pay");
            ui.horizontal(|ui| {
                if ui.button(format!("{} ▾", exchange.input.symbol)).clicked() {
                    actions.push(UiAction::OpenPicker(PickerTarget::Input));
                }
                let amount = ui.add(
                    egui::TextEdit::singleline(&mut exchange.amount)
                        .hint_text("0.0")
                        .desired_width(f32::INFINITY),
                );
                if amount.changed() {
                    actions.push(UiAction::AmountEdited);
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("⇅").on_hover_text("Flip tokens").clicked() {
                    actions.push(UiAction::Flip);
                }
                if ui.button("Refresh").on_hover_text("Fetch a new quote").clicked() {
                    actions.push(UiAction::RefreshQuote);
                }
                if exchange.quote_loading {
                    ui.spinner();
                }
            });
            ui.add_space(6.0);

            ui.label("You receive");
            ui.horizontal(|ui| {
                if ui.button(format!("{} ▾", exchange.output.symbol)).clicked() {
                    actions.push(UiAction::OpenPicker(PickerTarget::Output));
                }
                let mut received = exchange.output_amount.clone();
                ui.add_enabled(
                    false,
                    egui::TextEdit::singleline(&mut received).hint_text("0.0").desired_width(f32::INFINITY),
                );
            });
        });

        ui.add_space(8.0);
        if let Some(rate) = exchange.rate_display() {
            ui.label(format!("1 {} ≈ {} {}", exchange.input.symbol, rate, exchange.output.symbol));
            if let Some(impact) = exchange.quote.as_ref().and_then(|q| q.price_impact_pct) {
                ui.label(RichText::new(format!("Price impact: {impact:.4}%")).small());
            }
            if !exchange.route_labels.is_empty() {
                ui.label(RichText::new(format!("Route: {}", exchange.route_labels.join(" → "))).small());
            }
        }
        if let Some(error) = &exchange.error {
            ui.colored_label(colors.negative, error);
        }

        ui.add_space(12.0);
        let label = if exchange.swapping { "Processing..." } else { "Swap" };
        let button = egui::Button::new(RichText::new(label).strong().color(egui::Color32::WHITE))
            .fill(colors.accent)
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add_enabled(exchange.can_swap(can_sign), button).clicked() {
            actions.push(UiAction::Swap);
        }

        if let Some(signature) = &exchange.last_signature {
            if ui.link("View last swap on Solscan").clicked() {
                actions.push(UiAction::OpenExternal(explorer_url(signature, devnet)));
            }
        }

        if !connected {
            ui.label(RichText::new("Connect a wallet to swap").small());
        } else if !can_sign {
            ui.label(RichText::new("Watch-only wallets cannot swap").small());
        }
    });
}

fn explorer_url(signature: &str, devnet: bool) -> String {
    let cluster = if devnet { "?cluster=devnet" } else { "" };
    format!("https://solscan.io/tx/{signature}{cluster}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_url() {
        assert_eq!(explorer_url("abc", false), "https://solscan.io/tx/abc");
        assert_eq!(explorer_url("abc", true), "https://solscan.io/tx/abc?cluster=devnet");
    }
}
