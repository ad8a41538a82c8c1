//! Main screen: home listing, orders, chat, with bottom navigation.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CHAT_CIRCLE, CLIPBOARD_TEXT, HOUSE, MAGNIFYING_GLASS, USER};
use tracing::debug;

use super::app::{Action, SkillDarApp};
use super::components::{category_icon, category_tile, fixed_height, nav_bar, nav_button, screen_title, worker_card};
use crate::models::{CATEGORIES, UserRole, filter_workers};
use crate::state::Screen;
use crate::theme::Palette;

/// Content shown above the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Home,
    Orders,
    Chat,
}

/// Show the main screen.
pub fn show(app: &mut SkillDarApp, ui: &mut Ui) -> Option<Action> {
    let palette = Palette::for_variant(app.state.theme());
    let mut action = None;

    egui::TopBottomPanel::bottom("main_nav")
        .frame(egui::Frame::new())
        .show_inside(ui, |ui| {
            if let Some(a) = bottom_navigation(app, ui, &palette) {
                action = Some(a);
            }
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::new())
        .show_inside(ui, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let content_action = match (app.main_tab, app.state.user_role()) {
                    (MainTab::Home, UserRole::Client) => client_home(app, ui, &palette),
                    (MainTab::Home, UserRole::Worker) => {
                        empty_state(ui, &palette, "Incoming Requests", "No requests yet");
                        None
                    }
                    (MainTab::Orders, _) => {
                        empty_state(ui, &palette, "My Orders", "No orders yet");
                        None
                    }
                    (MainTab::Chat, _) => {
                        empty_state(ui, &palette, "Messages", "No messages yet");
                        None
                    }
                };
                if content_action.is_some() {
                    action = content_action;
                }
            });
        });

    action
}

fn bottom_navigation(app: &mut SkillDarApp, ui: &mut Ui, palette: &Palette) -> Option<Action> {
    let mut action = None;

    nav_bar(ui, palette, |ui| {
        fixed_height(ui, 56.0, |ui| {
            ui.columns(4, |columns| {
                let size = egui::vec2(columns[0].available_width(), 52.0);
                let tabs = [
                    (HOUSE, "Home", MainTab::Home),
                    (CLIPBOARD_TEXT, "Orders", MainTab::Orders),
                    (CHAT_CIRCLE, "Chat", MainTab::Chat),
                ];
                for (col, (icon, label, tab)) in columns.iter_mut().zip(tabs) {
                    if nav_button(col, palette, icon, label, app.main_tab == tab, size).clicked() {
                        app.main_tab = tab;
                    }
                }

                if nav_button(&mut columns[3], palette, USER, "Profile", false, size).clicked() {
                    let target = match app.state.user_role() {
                        UserRole::Client => Screen::EditProfileClient,
                        UserRole::Worker => Screen::Profile,
                    };
                    action = Some(Action::Navigate(target));
                }
            });
        });
    });

    action
}

fn client_home(app: &mut SkillDarApp, ui: &mut Ui, palette: &Palette) -> Option<Action> {
    let mut action = None;

    screen_title(ui, "Available Workers");

    ui.horizontal(|ui| {
        ui.label(MAGNIFYING_GLASS);
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.search)
                .hint_text("Search for workers...")
                .desired_width(f32::INFINITY),
        );
        if search.changed() {
            debug!("Search text changed: {}", app.search);
        }
    });

    ui.add_space(12.0);
    ui.label(RichText::new("Professional Categories").strong());
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        let size = egui::vec2(85.0, 85.0);
        for category in CATEGORIES {
            let selected = app.category.is_some_and(|c| c.key == category.key);
            if category_tile(ui, palette, category_icon(category.key), category.label, selected, size).clicked() {
                app.category = if selected { None } else { Some(category) };
                debug!("Category filter: {:?}", app.category.map(|c| c.label));
            }
        }
    });

    ui.add_space(12.0);
    let workers = filter_workers(&app.workers, &app.search, app.category);
    ui.label(RichText::new(format!("Available Workers Near You ({})", workers.len())).strong());
    ui.add_space(6.0);

    if workers.is_empty() {
        ui.label(RichText::new("No workers match your search").color(palette.weak_foreground));
    }

    for worker in workers {
        if worker_card(ui, palette, worker).clicked() {
            action = Some(Action::OpenWorker(worker.clone()));
        }
        ui.add_space(6.0);
    }

    action
}

fn empty_state(ui: &mut Ui, palette: &Palette, title: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.label(RichText::new(title).size(20.0).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(message).color(palette.weak_foreground));
    });
}
