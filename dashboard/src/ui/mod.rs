//! # User Interface
//!
//! Immediate-mode rendering. Nothing here mutates application state beyond
//! text field buffers; everything else is returned as [`UiAction`]s.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{AppState, Route, UiAction};

/// Draw one frame and return the actions the user took.
pub fn render(ctx: &egui::Context, state: &mut AppState) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let colors = theme::palette(state.settings.theme);

    egui::TopBottomPanel::top("nav_bar")
        .frame(egui::Frame::new().fill(colors.menu).inner_margin(egui::Margin::symmetric(12, 4)))
        .show(ctx, |ui| widgets::render_nav_bar(ui, state, &mut actions));

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match state.route.clone() {
            Route::Exchange => screens::render_exchange(ui, state, &mut actions),
            Route::Portfolio | Route::PortfolioAddress(_) => screens::render_portfolio(ui, state, &mut actions),
            Route::Token(_) => screens::render_token_page(ui, state, &mut actions),
        });
    });

    widgets::render_token_picker(ctx, state, &mut actions);
    widgets::render_approval(ctx, state, &mut actions);

    actions
}
