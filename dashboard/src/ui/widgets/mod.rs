//! # Widgets
//!
//! Reusable pieces shared by the screens.

pub mod approval;
pub mod nav_bar;
pub mod notifications;
pub mod token_picker;

pub use approval::render_approval;
pub use nav_bar::render_nav_bar;
pub use notifications::NotificationManager;
pub use token_picker::render_token_picker;
