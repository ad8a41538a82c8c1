//! The signed-in worker's own profile, plus the body shared with the
//! worker detail screen.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{
    ARROW_LEFT, CALENDAR_CHECK, CHAT_CIRCLE, CHECK_CIRCLE, MAP_PIN, PACKAGE, PHONE, STAR, TROPHY, USER_CIRCLE,
};
use tracing::debug;

use super::app::{Action, SkillDarApp};
use super::components::{ProfileTab, price_card, profile_tabs, round_action_button, stat_card};
use crate::models::WorkerProfile;
use crate::state::Screen;
use crate::theme::Palette;

const SAMPLE_REVIEWS: [&str; 2] = ["Excellent service! Highly recommend.", "Very professional and timely."];

/// Show the own-profile screen.
pub fn show(app: &mut SkillDarApp, ui: &mut Ui) -> Option<Action> {
    let palette = Palette::for_variant(app.state.theme());
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.add(egui::Button::new(RichText::new(ARROW_LEFT).size(18.0)).frame(false)).clicked() {
            action = Some(Action::Navigate(Screen::Main));
        }
        ui.label(RichText::new("My Profile").size(18.0).strong());
    });

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        let worker = &app.own_profile;
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(USER_CIRCLE).size(72.0).color(palette.highlight));
            ui.label(RichText::new(format!("{} {CHECK_CIRCLE}", worker.name)).size(20.0).strong());
            ui.label(RichText::new(&worker.profession).color(palette.weak_foreground));
            ui.label(format!("{STAR} {}  {MAP_PIN} {}", worker.rating_label(), worker.distance));
        });
        ui.add_space(8.0);

        profile_body(ui, &palette, worker, &mut app.profile_tab);
    });

    action
}

/// Stats row, action buttons, price card and tabbed details.
pub fn profile_body(ui: &mut Ui, palette: &Palette, worker: &WorkerProfile, tab: &mut ProfileTab) {
    ui.columns(3, |columns| {
        stat_card(&mut columns[0], palette, PACKAGE, &worker.completed_jobs.to_string(), "Completed");
        stat_card(&mut columns[1], palette, TROPHY, &worker.years_experience.to_string(), "Years Exp.");
        stat_card(&mut columns[2], palette, STAR, &format!("{:.1}", worker.clamped_rating()), "Rating");
    });

    ui.separator();
    ui.columns(3, |columns| {
        let actions = [(PHONE, "Call"), (CHAT_CIRCLE, "Chat"), (CALENDAR_CHECK, "Hire")];
        for (col, (icon, label)) in columns.iter_mut().zip(actions) {
            col.vertical_centered(|ui| {
                if round_action_button(ui, palette, icon, label, palette.background).clicked() {
                    debug!("{label} tapped for {}", worker.name);
                }
            });
        }
    });

    ui.separator();
    price_card(ui, palette, "Service Price", &worker.price_label(), "(Minimum 2 hours)");

    ui.separator();
    profile_tabs(ui, palette, tab);
    ui.add_space(8.0);

    match tab {
        ProfileTab::About => {
            ui.label(RichText::new("Summary").strong());
            let color = if worker.available { palette.success } else { palette.warning };
            ui.colored_label(color, worker.availability_label());
            ui.label(&worker.about);
        }
        ProfileTab::Skills => {
            if worker.skills.is_empty() {
                ui.label(RichText::new("No skills listed").color(palette.weak_foreground));
            }
            for skill in &worker.skills {
                ui.label(format!("• {skill}"));
            }
        }
        ProfileTab::Reviews => {
            ui.label(RichText::new(format!("{} reviews", worker.review_count)).strong());
            for review in SAMPLE_REVIEWS {
                ui.add_space(4.0);
                ui.label(RichText::new(STAR.repeat(5)).color(palette.warning));
                ui.label(format!("\"{review}\""));
            }
        }
    }
}
