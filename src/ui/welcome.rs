//! Welcome screen.

use eframe::egui::{RichText, Ui};
use egui_phosphor::regular::TOOLBOX;

use super::app::{Action, SkillDarApp};
use crate::state::Screen;
use crate::theme::Palette;

/// Show the welcome screen.
///
/// Returns an action when "Get Started" is clicked.
pub fn show(app: &SkillDarApp, ui: &mut Ui) -> Option<Action> {
    let palette = Palette::for_variant(app.state.theme());
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Welcome to SkillDar").size(26.0).strong());
        ui.label(RichText::new("Your Home, Our Expertise").size(15.0).color(palette.weak_foreground));

        ui.add_space(40.0);
        ui.label(RichText::new(TOOLBOX).size(140.0).color(palette.primary));
        ui.add_space(40.0);

        let button = eframe::egui::Button::new(RichText::new("Get Started").size(16.0).color(palette.on_primary))
            .fill(palette.primary)
            .min_size(eframe::egui::vec2(220.0, 44.0));
        if ui.add(button).clicked() {
            action = Some(Action::Navigate(Screen::Login));
        }
    });

    action
}
