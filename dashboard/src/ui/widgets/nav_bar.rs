//! # Navigation Bar
//!
//! Nav links, the token search box, the wallet menu and the settings menu.

use crate::app::{AppState, Route, ThemeMode, UiAction};
use crate::ui::theme::palette;
use egui::{Key, RichText};
use lib_core::RpcEndpoint;
use lib_utils::short_address;

/// Render the navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let colors = palette(state.settings.theme);

    ui.horizontal(|ui| {
        ui.set_height(40.0);
        ui.label(RichText::new("DEX Dashboard").strong().size(18.0).color(colors.accent));
        ui.add_space(16.0);

        nav_link(ui, state, "Exchange", Route::Exchange, actions);
        nav_link(ui, state, "Portfolio", Route::Portfolio, actions);
        ui.add_space(16.0);

        let search = ui.add(
            egui::TextEdit::singleline(&mut state.search)
                .hint_text("Search token address")
                .desired_width(320.0),
        );
        let submitted = search.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if submitted || ui.button("Search").clicked() {
            actions.push(UiAction::SearchToken);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_settings_menu(ui, state, actions);
            render_wallet_menu(ui, state, actions);
        });
    });
}

fn nav_link(ui: &mut egui::Ui, state: &AppState, label: &str, route: Route, actions: &mut Vec<UiAction>) {
    let active = match route {
        Route::Portfolio => state.route.is_portfolio(),
        ref other => state.route == *other,
    };
    if ui.selectable_label(active, label).clicked() {
        actions.push(UiAction::Navigate(route));
    }
}

fn render_wallet_menu(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let title = match state.wallet_address() {
        Some(address) => short_address(&address),
        None => "Connect Wallet".to_string(),
    };

    ui.menu_button(title, |ui| {
        if state.wallet.connector.is_connected() {
            if !state.wallet.connector.can_sign() {
                ui.label(RichText::new("Watch-only").italics());
            }
            if ui.button("Copy address").clicked() {
                actions.push(UiAction::CopyAddress);
                ui.close();
            }
            if state.services.endpoint.is_devnet() {
                let label = if state.wallet.airdrop_pending { "Requesting..." } else { "Request test SOL" };
                if ui.add_enabled(!state.wallet.airdrop_pending, egui::Button::new(label)).clicked() {
                    actions.push(UiAction::RequestAirdrop);
                    ui.close();
                }
            }
            if ui.button("Disconnect").clicked() {
                actions.push(UiAction::Disconnect);
                ui.close();
            }
            return;
        }

        if ui.button("Select keypair file...").clicked() {
            actions.push(UiAction::PickKeypair);
            ui.close();
        }
        if let Some(path) = state.wallet.default_keypair.clone() {
            if path.exists() && ui.button("Use default keypair").on_hover_text(path.display().to_string()).clicked() {
                actions.push(UiAction::ConnectKeypair(path));
                ui.close();
            }
        }
        if state.wallet.connector.can_reconnect() && ui.button("Reconnect").clicked() {
            actions.push(UiAction::Reconnect);
            ui.close();
        }

        ui.separator();
        ui.label("Watch an address:");
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut state.wallet.watch_input).desired_width(220.0));
            if ui.button("Watch").clicked() {
                actions.push(UiAction::ConnectWatchOnly);
                ui.close();
            }
        });
    });
}

fn render_settings_menu(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    ui.menu_button("Settings", |ui| {
        ui.horizontal(|ui| {
            ui.label("Theme:");
            let next = match state.settings.theme {
                ThemeMode::Light => "Dark",
                ThemeMode::Dark => "Light",
            };
            if ui.button(next).clicked() {
                actions.push(UiAction::ToggleTheme);
            }
        });

        ui.separator();
        ui.label("RPC endpoint:");
        for endpoint in RpcEndpoint::presets() {
            let selected = state.settings.rpc == endpoint;
            if ui.radio(selected, endpoint.label()).clicked() && !selected {
                actions.push(UiAction::SetEndpoint(endpoint));
            }
        }

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.custom_rpc_input)
                    .hint_text("https://my-rpc.example")
                    .desired_width(220.0),
            );
            if ui.button("Use custom").clicked() {
                let url = state.custom_rpc_input.trim().to_string();
                actions.push(UiAction::SetEndpoint(RpcEndpoint::Custom(url)));
            }
        });
        if let RpcEndpoint::Custom(url) = &state.settings.rpc {
            ui.label(RichText::new(format!("Using {url}")).small());
        }
    });
}
