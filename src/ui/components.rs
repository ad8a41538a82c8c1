//! Shared UI components.

use std::time::Duration;

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Sense, Stroke, StrokeKind, Ui};
use egui_phosphor::regular::{
    ARMCHAIR, BROOM, CHECK_CIRCLE, DROP, GEAR_SIX, HAMMER, HOURGLASS, LIGHTNING, LOCK_KEY, MAP_PIN,
    PAINT_ROLLER, SNOWFLAKE, STAR, TOOLBOX, USER_CIRCLE, WARNING, WIFI_SLASH, WRENCH, X,
};

use crate::config::StatusColors;
use crate::connectivity::{ConnectionCheck, ConnectionStatus};
use crate::models::WorkerProfile;
use crate::theme::Palette;

/// How long a round action button stays grey after a tap.
const TAP_FEEDBACK: f64 = 0.1;

/// Tabs on the profile screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    About,
    Skills,
    Reviews,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::About, ProfileTab::Skills, ProfileTab::Reviews];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::About => "About",
            ProfileTab::Skills => "Skills",
            ProfileTab::Reviews => "Reviews",
        }
    }
}

/// Icon glyph for a category key.
pub fn category_icon(key: &str) -> &'static str {
    match key {
        "plumbing" => WRENCH,
        "electricity" => LIGHTNING,
        "painting" => PAINT_ROLLER,
        "acFixing" => SNOWFLAKE,
        "homeCleaning" => BROOM,
        "smallRepairs" => HAMMER,
        "furnitureAssembly" => ARMCHAIR,
        "waterLeakage" => DROP,
        "applianceRepair" => GEAR_SIX,
        "locksmith" => LOCK_KEY,
        _ => TOOLBOX,
    }
}

/// Icon glyph for a connection status.
pub fn status_icon(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => CHECK_CIRCLE,
        ConnectionStatus::NoInternet => WIFI_SLASH,
        ConnectionStatus::ServerDown => WARNING,
        ConnectionStatus::SlowConnection => HOURGLASS,
    }
}

/// Centered bold screen title.
pub fn screen_title(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(title).size(22.0).strong());
        ui.add_space(8.0);
    });
}

/// Themed background strip for navigation rows.
pub fn nav_bar<R>(ui: &mut Ui, palette: &Palette, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(palette.nav_bar)
        .inner_margin(Margin::symmetric(6, 6))
        .show(ui, add_contents)
        .inner
}

/// Bottom-bar button: icon above label, primary fill when active.
pub fn nav_button(ui: &mut Ui, palette: &Palette, icon: &str, label: &str, active: bool, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let mut fill = palette.nav_button_fill(active);
        if response.hovered() && !active {
            fill = fill.gamma_multiply(0.85);
        }
        let text_color = palette.nav_button_text(active);

        ui.painter().rect_filled(rect, 8.0, fill);
        ui.painter().text(
            egui::pos2(rect.center().x, rect.top() + size.y * 0.35),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(20.0),
            text_color,
        );
        ui.painter().text(
            egui::pos2(rect.center().x, rect.bottom() - size.y * 0.22),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(12.0),
            text_color,
        );
    }

    response
}

/// Lay out `add_contents` in a region of exactly `height` points.
pub fn fixed_height<R>(ui: &mut Ui, height: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let size = egui::vec2(ui.available_width(), height);
    ui.allocate_ui(size, |ui| {
        ui.set_min_height(height);
        ui.set_max_height(height);
        add_contents(ui)
    })
    .inner
}

/// Icon, bold value, caption.
pub fn stat_card(ui: &mut Ui, palette: &Palette, icon: &str, value: &str, label: &str) {
    egui::Frame::new()
        .fill(palette.surface)
        .inner_margin(Margin::same(8))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(icon).size(18.0));
                ui.label(RichText::new(value).size(18.0).strong());
                ui.label(RichText::new(label).small().color(palette.weak_foreground));
            });
        });
}

/// Circular action button with a short grey flash on tap.
pub fn round_action_button(ui: &mut Ui, palette: &Palette, icon: &str, label: &str, fill: Color32) -> Response {
    let size = egui::vec2(72.0, 72.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let now = ui.input(|i| i.time);

    if response.clicked() {
        ui.data_mut(|d| d.insert_temp(response.id, now));
    }

    let pressed_at: Option<f64> = ui.data(|d| d.get_temp(response.id));
    let flashing = pressed_at.is_some_and(|t| now - t < TAP_FEEDBACK);
    if let Some(t) = pressed_at {
        if flashing {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(TAP_FEEDBACK - (now - t)));
        } else {
            ui.data_mut(|d| d.remove::<f64>(response.id));
        }
    }

    if ui.is_rect_visible(rect) {
        let bg = if flashing { palette.tap_feedback } else { fill };
        let text_color = if fill == palette.primary {
            palette.on_primary
        } else {
            palette.foreground
        };

        ui.painter()
            .circle(rect.center(), size.x / 2.0, bg, Stroke::new(1.0, palette.nav_bar));
        ui.painter().text(
            egui::pos2(rect.center().x, rect.center().y - 8.0),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(20.0),
            text_color,
        );
        ui.painter().text(
            egui::pos2(rect.center().x, rect.center().y + 14.0),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(12.0),
            text_color,
        );
    }

    response
}

/// Dismissible status strip. Returns `true` when the close button was clicked.
pub fn connection_banner(ui: &mut Ui, check: &ConnectionCheck, colors: &StatusColors) -> bool {
    let (bg, text) = colors.colors_for(check.status);
    let mut dismissed = false;

    egui::Frame::new()
        .fill(bg)
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(status_icon(check.status)).size(18.0).color(text));
                ui.label(RichText::new(&check.message).size(14.0).color(text));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new(RichText::new(X).color(text)).frame(false)).clicked() {
                        dismissed = true;
                    }
                });
            });
        });

    dismissed
}

/// About / Skills / Reviews selector with an underline on the active tab.
pub fn profile_tabs(ui: &mut Ui, palette: &Palette, current: &mut ProfileTab) {
    ui.columns(ProfileTab::ALL.len(), |columns| {
        for (col, tab) in columns.iter_mut().zip(ProfileTab::ALL) {
            col.vertical_centered(|ui| {
                let active = *current == tab;
                let text = if active {
                    RichText::new(tab.label()).strong()
                } else {
                    RichText::new(tab.label()).color(palette.weak_foreground)
                };
                let response = ui.add(egui::Button::new(text).frame(false));
                if active {
                    let rect = response.rect;
                    ui.painter().hline(
                        rect.x_range(),
                        rect.bottom() + 2.0,
                        Stroke::new(2.0, palette.primary),
                    );
                }
                if response.clicked() {
                    *current = tab;
                }
            });
        }
    });
}

/// Highlighted card with a large price.
pub fn price_card(ui: &mut Ui, palette: &Palette, title: &str, amount: &str, note: &str) {
    egui::Frame::new()
        .fill(palette.highlight)
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(title);
                ui.label(RichText::new(amount).size(28.0).strong());
                ui.label("Per Hour");
                ui.label(RichText::new(note).small().color(palette.weak_foreground));
            });
        });
}

/// Square category tile with icon and label.
pub fn category_tile(ui: &mut Ui, palette: &Palette, icon: &str, label: &str, selected: bool, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let (fill, stroke) = if selected {
            (palette.primary, Stroke::new(1.0, palette.primary))
        } else {
            (palette.surface, visuals.bg_stroke)
        };
        let text_color = if selected { palette.on_primary } else { palette.foreground };

        ui.painter().rect_filled(rect, 8.0, fill);
        ui.painter().rect_stroke(rect, 8.0, stroke, StrokeKind::Inside);
        ui.painter().text(
            egui::pos2(rect.center().x, rect.top() + size.y * 0.38),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(26.0),
            text_color,
        );

        let galley = ui.painter().layout(
            label.to_string(),
            egui::FontId::proportional(11.0),
            text_color,
            size.x - 6.0,
        );
        let text_pos = egui::pos2(rect.center().x - galley.size().x / 2.0, rect.bottom() - size.y * 0.36);
        ui.painter().galley(text_pos, galley, text_color);
    }

    response
}

/// Clickable listing card for a worker.
pub fn worker_card(ui: &mut Ui, palette: &Palette, worker: &WorkerProfile) -> Response {
    let frame = egui::Frame::new()
        .fill(palette.surface)
        .inner_margin(Margin::same(10))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(USER_CIRCLE).size(40.0).color(palette.warning));
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&worker.name).strong());
                        ui.label(RichText::new(format!("{CHECK_CIRCLE} Verified")).small().color(palette.primary));
                    });
                    ui.label(RichText::new(&worker.profession).color(palette.weak_foreground));
                    ui.label(
                        RichText::new(format!(
                            "{STAR} {:.1} ({})  {MAP_PIN} {}",
                            worker.clamped_rating(),
                            worker.review_count,
                            worker.distance
                        ))
                        .small(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(worker.price_label()).strong());
                        let color = if worker.available { palette.success } else { palette.warning };
                        ui.label(RichText::new(worker.availability_label()).small().color(color));
                    });
                });
            });
        });

    ui.interact(frame.response.rect, frame.response.id.with("card"), Sense::click())
}
