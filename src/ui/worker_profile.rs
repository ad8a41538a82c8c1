//! Worker detail screen opened from a listing card.

use eframe::egui::{self, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{ARROW_LEFT, CHECK_CIRCLE, MAP_PIN, STAR, USER_CIRCLE};

use super::app::{Action, SkillDarApp};
use super::profile::profile_body;
use crate::state::Screen;
use crate::theme::Palette;

/// Show the stored worker. Renders its own header instead of the shared top bar.
pub fn show(app: &mut SkillDarApp, ui: &mut Ui) -> Option<Action> {
    let palette = Palette::for_variant(app.state.theme());
    let mut action = None;

    let Some(worker) = app.state.current_worker() else {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.label("No worker selected");
            if ui.button("Back to Home").clicked() {
                action = Some(Action::Navigate(Screen::Main));
            }
        });
        return action;
    };

    egui::Frame::new()
        .fill(palette.primary)
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                let back = egui::Button::new(RichText::new(ARROW_LEFT).size(18.0).color(palette.on_primary)).frame(false);
                if ui.add(back).clicked() {
                    action = Some(Action::Navigate(Screen::Main));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{CHECK_CIRCLE} Verified"))
                            .strong()
                            .color(palette.on_primary),
                    );
                });
            });

            ui.vertical_centered(|ui| {
                ui.label(RichText::new(USER_CIRCLE).size(80.0).color(palette.highlight));
                ui.label(RichText::new(&worker.name).size(20.0).strong().color(palette.on_primary));
                ui.label(RichText::new(&worker.profession).size(14.0).color(palette.on_primary));
                ui.label(
                    RichText::new(format!(
                        "{STAR} {}  {MAP_PIN} {}",
                        worker.rating_label(),
                        worker.distance
                    ))
                    .size(12.0)
                    .color(palette.on_primary),
                );
            });
        });

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(8.0);
        profile_body(ui, &palette, worker, &mut app.worker_tab);
    });

    action
}
