//! Application shell: top bar, connection banner and screen dispatch.

use eframe::egui::{self, RichText};
use egui_phosphor::regular::{ARROW_LEFT, MOON, SUN};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::connectivity::{ConnectionCheck, MonitorHandle, spawn_monitor};
use crate::models::{Category, ClientProfile, LoginForm, UserRole, WorkerProfile, sample_workers};
use crate::state::{AppState, Screen};
use crate::theme::{self, Palette, ThemeVariant};

use super::components::{ProfileTab, connection_banner};
use super::home::MainTab;
use super::{edit_profile, home, login, profile, welcome, worker_profile};

/// What a screen asks the shell to do after it has been drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Screen),
    OpenWorker(WorkerProfile),
    Back,
    /// Sign in with the given role and land on Main.
    SetRole(UserRole),
    ToggleTheme,
}

/// Main application state.
pub struct SkillDarApp {
    rt: tokio::runtime::Runtime,
    config: AppConfig,
    pub state: AppState,

    // Sample data
    pub(crate) workers: Vec<WorkerProfile>,
    pub(crate) own_profile: WorkerProfile,

    // Forms
    pub(crate) login_form: LoginForm,
    pub(crate) client_profile: ClientProfile,
    pub(crate) profile_draft: ClientProfile,
    pub(crate) profile_error: Option<String>,

    // Per-screen view state
    pub(crate) main_tab: MainTab,
    pub(crate) search: String,
    pub(crate) category: Option<&'static Category>,
    pub(crate) profile_tab: ProfileTab,
    pub(crate) worker_tab: ProfileTab,

    // Connectivity
    monitor: Option<MonitorHandle>,
    status_tx: mpsc::UnboundedSender<ConnectionCheck>,
    status_rx: mpsc::UnboundedReceiver<ConnectionCheck>,
    pub connection: Option<ConnectionCheck>,
}

impl SkillDarApp {
    pub fn new(config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let theme = ThemeVariant::from_dark(config.ui.dark_theme);
        let workers = sample_workers();
        let own_profile = workers.first().cloned().unwrap_or_default();
        let client_profile = ClientProfile::default();
        let (status_tx, status_rx) = mpsc::unbounded_channel();

        Self {
            rt,
            config,
            state: AppState::new(theme),
            workers,
            own_profile,
            login_form: LoginForm::default(),
            profile_draft: client_profile.clone(),
            client_profile,
            profile_error: None,
            main_tab: MainTab::default(),
            search: String::new(),
            category: None,
            profile_tab: ProfileTab::default(),
            worker_tab: ProfileTab::default(),
            monitor: None,
            status_tx,
            status_rx,
            connection: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Start background health polling if enabled in config.
    pub fn start_monitor(&mut self, ctx: &egui::Context) {
        if !self.config.api.monitor_enabled {
            debug!("Connection monitor disabled");
            return;
        }

        let ctx = ctx.clone();
        match spawn_monitor(
            self.rt.handle(),
            self.config.api.clone(),
            self.config.api.monitor_interval(),
            self.status_tx.clone(),
            move || ctx.request_repaint(),
        ) {
            Ok(handle) => self.monitor = Some(handle),
            Err(e) => warn!("Failed to start connection monitor: {}", e),
        }
    }

    /// Whether a monitor task is currently running.
    pub fn monitor_running(&self) -> bool {
        self.monitor.as_ref().is_some_and(|m| !m.is_finished())
    }

    pub fn show_connection_error(&mut self, check: ConnectionCheck) {
        info!("Connection problem: {}", check.message);
        self.connection = Some(check);
    }

    pub fn hide_connection_error(&mut self) {
        if self.connection.take().is_some() {
            info!("Connection restored");
        }
    }

    fn poll_connection(&mut self) {
        while let Ok(check) = self.status_rx.try_recv() {
            if check.is_connected() {
                self.hide_connection_error();
            } else {
                self.show_connection_error(check);
            }
        }
    }

    /// Apply a screen's action to the app state.
    pub fn apply_action(&mut self, ctx: &egui::Context, action: Action) {
        debug!("Action: {:?}", action);
        match action {
            Action::Navigate(screen) => self.state.show_screen(screen),
            Action::OpenWorker(worker) => {
                self.worker_tab = ProfileTab::default();
                self.state.show_worker_profile(worker);
            }
            Action::Back => self.state.go_back(),
            Action::SetRole(role) => {
                self.state.set_user_role(role);
                self.main_tab = MainTab::default();
                self.state.show_screen(Screen::Main);
            }
            Action::ToggleTheme => {
                let variant = self.state.toggle_theme();
                theme::apply(ctx, variant);
            }
        }
    }

    fn show_top_bar(&self, ctx: &egui::Context) -> Option<Action> {
        let palette = Palette::for_variant(self.state.theme());
        let mut action = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let back = ui.add_enabled(
                    self.state.can_go_back(),
                    egui::Button::new(RichText::new(ARROW_LEFT).size(18.0)).frame(false),
                );
                if back.clicked() {
                    action = Some(Action::Back);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.state.theme().is_dark() { SUN } else { MOON };
                    let toggle = egui::Button::new(RichText::new(icon).size(18.0).color(palette.foreground)).frame(false);
                    if ui.add(toggle).on_hover_text("Toggle theme").clicked() {
                        action = Some(Action::ToggleTheme);
                    }
                });
            });
        });

        action
    }

    fn show_connection_banner(&mut self, ctx: &egui::Context) {
        let Some(check) = &self.connection else {
            return;
        };

        let mut dismissed = false;
        egui::TopBottomPanel::top("connection_banner")
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                dismissed = connection_banner(ui, check, &self.config.status_colors);
            });

        if dismissed {
            debug!("Connection banner dismissed");
            self.connection = None;
        }
    }
}

impl eframe::App for SkillDarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_connection();

        let mut action = None;
        let screen = self.state.active_screen();

        if screen.has_top_bar() {
            action = self.show_top_bar(ctx);
        }

        self.show_connection_banner(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let screen_action = match screen {
                Screen::Welcome => welcome::show(self, ui),
                Screen::Login => login::show(self, ui),
                Screen::Main => home::show(self, ui),
                Screen::Profile => profile::show(self, ui),
                Screen::EditProfileClient => edit_profile::show(self, ui),
                Screen::WorkerProfile => worker_profile::show(self, ui),
            };
            if screen_action.is_some() {
                action = screen_action;
            }
        });

        if let Some(action) = action {
            self.apply_action(ctx, action);
        }
    }
}
