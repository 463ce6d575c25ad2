//! # Notifications Widget
//!
//! Toasts for wallet and swap events, auto-hidden after [`TOAST_DURATION`].

use egui_notify::Toasts;
use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    toasts: Toasts,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message).duration(Some(TOAST_DURATION));
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message).duration(Some(TOAST_DURATION));
    }

    /// Errors stay a little longer.
    pub fn error(&mut self, message: String) {
        self.toasts.error(message).duration(Some(TOAST_DURATION * 2));
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_each_kind() {
        let mut manager = NotificationManager::new();
        manager.success("Wallet connected".into());
        manager.info("Wallet address copied".into());
        manager.error("Failed to fetch token list".into());
    }
}
