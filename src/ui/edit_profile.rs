//! Client profile form.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{FLOPPY_DISK, USER_CIRCLE, X};
use tracing::{debug, info};

use super::app::{Action, SkillDarApp};
use super::components::screen_title;
use crate::state::Screen;
use crate::theme::Palette;

/// Show the edit form for `app.profile_draft`.
pub fn show(app: &mut SkillDarApp, ui: &mut Ui) -> Option<Action> {
    let palette = Palette::for_variant(app.state.theme());
    let mut action = None;

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        screen_title(ui, "Edit Client Profile");

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(USER_CIRCLE).size(72.0).color(palette.highlight));
            if ui.button("Change Profile Picture").clicked() {
                debug!("Profile picture change requested");
            }
        });

        ui.add_space(12.0);
        ui.label(RichText::new("Personal Information").strong());

        let draft = &mut app.profile_draft;
        let fields = [
            (&mut draft.full_name, "Full Name"),
            (&mut draft.email, "Email"),
            (&mut draft.phone, "Phone Number"),
            (&mut draft.location, "Location/Address"),
        ];
        for (value, hint) in fields {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Bio").strong());
        ui.add(
            egui::TextEdit::multiline(&mut draft.bio)
                .hint_text("Tell us about yourself...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        if let Some(error) = &app.profile_error {
            ui.add_space(8.0);
            ui.colored_label(palette.error, error);
        }

        ui.add_space(16.0);
        ui.columns(2, |columns| {
            let save = egui::Button::new(RichText::new(format!("{FLOPPY_DISK} Save Changes")).color(palette.on_primary))
                .fill(palette.primary)
                .min_size(egui::vec2(columns[0].available_width(), 40.0));
            if columns[0].add(save).clicked() {
                match app.profile_draft.validate() {
                    Ok(()) => {
                        app.client_profile = app.profile_draft.clone();
                        app.profile_error = None;
                        info!(
                            "Saved client profile: {} <{}>",
                            app.client_profile.full_name, app.client_profile.email
                        );
                        action = Some(Action::Navigate(Screen::Main));
                    }
                    Err(e) => app.profile_error = Some(e.user_message()),
                }
            }

            let cancel = egui::Button::new(format!("{X} Cancel")).min_size(egui::vec2(columns[1].available_width(), 40.0));
            if columns[1].add(cancel).clicked() {
                app.profile_draft = app.client_profile.clone();
                app.profile_error = None;
                action = Some(Action::Navigate(Screen::Main));
            }
        });
    });

    action
}
