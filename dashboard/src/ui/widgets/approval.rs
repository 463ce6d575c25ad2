//! # Approval Prompt
//!
//! Asks the user to approve a pending wallet signature.

use crate::app::{AppState, UiAction};
use egui::RichText;

pub fn render_approval(ctx: &egui::Context, state: &AppState, actions: &mut Vec<UiAction>) {
    let Some(request) = &state.pending_approval else {
        return;
    };

    egui::Window::new("Approve transaction")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(RichText::new(&request.summary).strong());
            if let Some(address) = state.wallet_address() {
                ui.label(format!("Signer: {address}"));
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Approve").clicked() {
                    actions.push(UiAction::ResolveApproval(true));
                }
                if ui.button("Reject").clicked() {
                    actions.push(UiAction::ResolveApproval(false));
                }
            });
        });
}
