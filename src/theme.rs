//! Light/dark color scheme.
//!
//! Everything here is a pure function of [`ThemeVariant`]; widgets look up
//! the palette each frame instead of caching colors.

use eframe::egui::{self, Color32, Stroke};
use serde::{Deserialize, Serialize};

/// Active color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub fn toggled(self) -> Self {
        match self {
            ThemeVariant::Light => ThemeVariant::Dark,
            ThemeVariant::Dark => ThemeVariant::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeVariant::Dark)
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeVariant::Dark } else { ThemeVariant::Light }
    }
}

/// Named colors used by the screens and custom widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub on_primary: Color32,
    pub background: Color32,
    pub foreground: Color32,
    pub weak_foreground: Color32,
    pub surface: Color32,
    pub nav_bar: Color32,
    pub highlight: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    /// Fill shown briefly while a round action button is pressed.
    pub tap_feedback: Color32,
}

/// Brand blue.
pub const PRIMARY: Color32 = Color32::from_rgb(0x28, 0x7D, 0xF7);

impl Palette {
    pub const fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self {
                primary: PRIMARY,
                on_primary: Color32::WHITE,
                background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
                foreground: Color32::from_rgb(0x20, 0x20, 0x20),
                weak_foreground: Color32::from_rgb(0x70, 0x70, 0x70),
                surface: Color32::WHITE,
                nav_bar: Color32::from_rgb(0xE8, 0xE8, 0xE8),
                highlight: Color32::from_rgb(0xFF, 0xF3, 0xD6),
                success: Color32::from_rgb(0x2E, 0x9E, 0x4F),
                warning: Color32::from_rgb(0xE0, 0x8E, 0x00),
                error: Color32::from_rgb(0xE5, 0x39, 0x35),
                tap_feedback: Color32::from_rgb(180, 180, 180),
            },
            ThemeVariant::Dark => Self {
                primary: PRIMARY,
                on_primary: Color32::WHITE,
                background: Color32::from_rgb(0x1A, 0x1A, 0x1A),
                foreground: Color32::from_rgb(0xE0, 0xE0, 0xE0),
                weak_foreground: Color32::from_rgb(0x9A, 0x9A, 0x9A),
                surface: Color32::from_rgb(0x26, 0x26, 0x26),
                nav_bar: Color32::from_rgb(0x2C, 0x2C, 0x2C),
                highlight: Color32::from_rgb(0x4A, 0x3F, 0x22),
                success: Color32::from_rgb(0x66, 0xBB, 0x6A),
                warning: Color32::from_rgb(0xFF, 0xB7, 0x4D),
                error: Color32::from_rgb(0xEF, 0x53, 0x50),
                tap_feedback: Color32::from_rgb(180, 180, 180),
            },
        }
    }

    /// Fill for a bottom-bar button.
    pub fn nav_button_fill(&self, active: bool) -> Color32 {
        if active { self.primary } else { self.nav_bar }
    }

    /// Label color for a bottom-bar button.
    pub fn nav_button_text(&self, active: bool) -> Color32 {
        if active { self.on_primary } else { self.foreground }
    }
}

/// egui visuals for a variant.
pub fn visuals(variant: ThemeVariant) -> egui::Visuals {
    let palette = Palette::for_variant(variant);
    let mut visuals = if variant.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.nav_bar;
    visuals.override_text_color = Some(palette.foreground);
    visuals.hyperlink_color = palette.primary;
    visuals.selection.bg_fill = palette.primary;
    visuals.selection.stroke = Stroke::new(1.0, palette.on_primary);
    visuals.warn_fg_color = palette.warning;
    visuals.error_fg_color = palette.error;

    visuals
}

/// Install the variant's visuals on the context and schedule a redraw.
pub fn apply(ctx: &egui::Context, variant: ThemeVariant) {
    ctx.set_visuals(visuals(variant));
    ctx.request_repaint();
    tracing::debug!("Applied {:?} theme", variant);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            assert_eq!(variant.toggled().toggled(), variant);
            assert_ne!(variant.toggled(), variant);
        }
    }

    #[test]
    fn test_palette_backgrounds() {
        let light = Palette::for_variant(ThemeVariant::Light);
        let dark = Palette::for_variant(ThemeVariant::Dark);
        assert_eq!(light.background, Color32::from_rgb(0xF5, 0xF5, 0xF5));
        assert_eq!(dark.background, Color32::from_rgb(0x1A, 0x1A, 0x1A));
        assert_eq!(light.primary, dark.primary);
    }

    #[test]
    fn test_nav_button_fill() {
        let palette = Palette::for_variant(ThemeVariant::Light);
        assert_eq!(palette.nav_button_fill(true), PRIMARY);
        assert_eq!(palette.nav_button_fill(false), palette.nav_bar);
    }

    #[test]
    fn test_visuals_follow_variant() {
        assert!(visuals(ThemeVariant::Dark).dark_mode);
        assert!(!visuals(ThemeVariant::Light).dark_mode);
        assert_eq!(
            visuals(ThemeVariant::Dark).override_text_color,
            Some(Palette::for_variant(ThemeVariant::Dark).foreground)
        );
    }
}
