//! Login screen with role selection.

use eframe::egui::{self, RichText, Ui};
use tracing::info;

use super::app::{Action, SkillDarApp};
use crate::models::UserRole;
use crate::theme::Palette;

/// Show the login screen.
pub fn show(app: &mut SkillDarApp, ui: &mut Ui) -> Option<Action> {
    let palette = Palette::for_variant(app.state.theme());
    let form = &mut app.login_form;
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Welcome to SkillDar").size(24.0).strong());
        ui.label(RichText::new("Connect skills, build networks").color(palette.weak_foreground));
        ui.add_space(30.0);

        let width = (ui.available_width() - 40.0).min(320.0);
        ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("Email or Username")
                .desired_width(width),
        );
        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::singleline(&mut form.password)
                .hint_text("Password")
                .password(true)
                .desired_width(width),
        );

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - 200.0) / 2.0).max(0.0));
            ui.label("I am a");
            ui.radio_value(&mut form.role, UserRole::Client, "Client");
            ui.radio_value(&mut form.role, UserRole::Worker, "Worker");
        });

        ui.add_space(16.0);
        let login = egui::Button::new(RichText::new("Login").color(palette.on_primary))
            .fill(palette.primary)
            .min_size(egui::vec2(width, 40.0));
        if ui.add(login).clicked() {
            match form.validate() {
                Ok(()) => {
                    info!("Logged in as: {} ({})", form.email.trim(), form.role.name());
                    let role = form.role;
                    form.reset();
                    action = Some(Action::SetRole(role));
                }
                Err(e) => form.error = Some(e.user_message()),
            }
        }

        if let Some(error) = &form.error {
            ui.add_space(8.0);
            ui.colored_label(palette.error, error);
        }
    });

    action
}
