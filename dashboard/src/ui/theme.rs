//! # GUI Theme
//!
//! Light and dark palettes for the dashboard, mapped onto egui visuals.

use crate::app::ThemeMode;
use egui::{Color32, Context, Stroke, Theme as EguiTheme, Visuals};

/// Colors of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color32,
    /// Nav bar and menus.
    pub menu: Color32,
    pub text: Color32,
    pub accent: Color32,
    /// Active nav link.
    pub link_active: Color32,
    pub hover: Color32,
    pub positive: Color32,
    pub negative: Color32,
}

pub const LIGHT: Palette = Palette {
    background: Color32::from_rgb(0xf9, 0xf9, 0xf9),
    menu: Color32::from_rgb(0xff, 0xff, 0xff),
    text: Color32::from_rgb(0x1f, 0x1f, 0x1f),
    accent: Color32::from_rgb(0x9a, 0x00, 0xff),
    link_active: Color32::from_rgb(0xd8, 0xd8, 0xef),
    hover: Color32::from_rgb(0xec, 0xe4, 0xf7),
    positive: Color32::from_rgb(0x1e, 0x8e, 0x3e),
    negative: Color32::from_rgb(0xd9, 0x30, 0x25),
};

pub const DARK: Palette = Palette {
    background: Color32::from_rgb(0x0e, 0x16, 0x21),
    menu: Color32::from_rgb(0x1b, 0x24, 0x30),
    text: Color32::from_rgb(0xff, 0xff, 0xff),
    accent: Color32::from_rgb(0x9a, 0x00, 0xff),
    link_active: Color32::from_rgb(0x3a, 0x1d, 0x5c),
    hover: Color32::from_rgb(0x50, 0x29, 0x73),
    positive: Color32::from_rgb(0x4c, 0xd9, 0x64),
    negative: Color32::from_rgb(0xff, 0x5c, 0x5c),
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

/// egui visuals for `mode`.
pub fn visuals(mode: ThemeMode) -> Visuals {
    let colors = palette(mode);
    let mut visuals = match mode {
        ThemeMode::Light => Visuals::light(),
        ThemeMode::Dark => Visuals::dark(),
    };

    visuals.override_text_color = Some(colors.text);
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.menu;
    visuals.extreme_bg_color = colors.menu;
    visuals.faint_bg_color = colors.menu;

    visuals.widgets.inactive.weak_bg_fill = colors.menu;
    visuals.widgets.hovered.weak_bg_fill = colors.hover;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);
    visuals.widgets.active.weak_bg_fill = colors.link_active;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.accent);

    visuals.selection.bg_fill = colors.link_active;
    visuals.selection.stroke = Stroke::new(1.0, colors.accent);
    visuals.hyperlink_color = colors.accent;
    visuals
}

/// Push `mode` to egui.
pub fn apply(ctx: &Context, mode: ThemeMode) {
    let (egui_theme, visuals) = match mode {
        ThemeMode::Light => (EguiTheme::Light, visuals(mode)),
        ThemeMode::Dark => (EguiTheme::Dark, visuals(mode)),
    };
    ctx.style_mut_of(egui_theme, |style| {
        style.visuals = visuals;
        style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
        style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
    });
    ctx.set_theme(egui_theme);
    tracing::debug!("Applied {:?} theme", mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_follow_mode() {
        assert_eq!(palette(ThemeMode::Dark).background, Color32::from_rgb(14, 22, 33));
        assert_eq!(palette(ThemeMode::Light).accent, Color32::from_rgb(154, 0, 255));

        let dark = visuals(ThemeMode::Dark);
        assert!(dark.dark_mode);
        assert_eq!(dark.override_text_color, Some(Color32::WHITE));
        assert!(!visuals(ThemeMode::Light).dark_mode);
    }
}
