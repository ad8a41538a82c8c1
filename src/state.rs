//! Navigation history and app-level state.
//!
//! Owned by the eframe app and handed to every screen; nothing here touches
//! egui, so transitions are plain method calls on the UI thread.

use tracing::{debug, info};

use crate::models::{UserRole, WorkerProfile};
use crate::theme::ThemeVariant;

/// Screen identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Login,
    Main,
    Profile,
    EditProfileClient,
    /// Detail view for [`AppState::current_worker`]. Not registered: it can
    /// only be entered through [`AppState::show_worker_profile`].
    WorkerProfile,
}

impl Screen {
    /// Screens reachable through [`AppState::show_screen`].
    pub const REGISTERED: [Screen; 5] = [
        Screen::Welcome,
        Screen::Login,
        Screen::Main,
        Screen::Profile,
        Screen::EditProfileClient,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login => "login",
            Screen::Main => "main",
            Screen::Profile => "profile",
            Screen::EditProfileClient => "edit_profile_client",
            Screen::WorkerProfile => "worker_profile",
        }
    }

    pub fn from_id(id: &str) -> Option<Screen> {
        match id {
            "welcome" => Some(Screen::Welcome),
            "login" => Some(Screen::Login),
            "main" => Some(Screen::Main),
            "profile" => Some(Screen::Profile),
            "edit_profile_client" => Some(Screen::EditProfileClient),
            "worker_profile" => Some(Screen::WorkerProfile),
            _ => None,
        }
    }

    pub fn is_registered(&self) -> bool {
        Self::REGISTERED.contains(self)
    }

    /// Whether the shared top bar (back + theme toggle) wraps this screen.
    pub fn has_top_bar(&self) -> bool {
        !matches!(self, Screen::WorkerProfile)
    }
}

/// Application state for one window.
#[derive(Debug, Clone)]
pub struct AppState {
    history: Vec<Screen>,
    theme: ThemeVariant,
    user_role: UserRole,
    current_worker: Option<WorkerProfile>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl AppState {
    /// Create state showing the welcome screen.
    pub fn new(theme: ThemeVariant) -> Self {
        let mut state = Self {
            history: Vec::new(),
            theme,
            user_role: UserRole::default(),
            current_worker: None,
        };
        state.show_screen(Screen::Welcome);
        state
    }

    /// Show a registered screen, recording it in history.
    ///
    /// Unregistered screens are ignored.
    pub fn show_screen(&mut self, screen: Screen) {
        if !screen.is_registered() {
            debug!("Ignoring navigation to unregistered screen '{}'", screen.id());
            return;
        }
        self.push(screen);
        debug!("Showing screen '{}' (history depth {})", screen.id(), self.history.len());
    }

    /// String-keyed variant of [`show_screen`](Self::show_screen); unknown ids are ignored.
    pub fn show_screen_id(&mut self, id: &str) {
        match Screen::from_id(id) {
            Some(screen) => self.show_screen(screen),
            None => debug!("Ignoring navigation to unknown screen id '{id}'"),
        }
    }

    /// Open the detail view for a worker.
    pub fn show_worker_profile(&mut self, profile: WorkerProfile) {
        info!("Viewing worker profile: {}", profile.name);
        self.current_worker = Some(profile);
        self.push(Screen::WorkerProfile);
    }

    /// Return to the previous screen. No-op with one entry or fewer.
    pub fn go_back(&mut self) {
        if self.history.len() <= 1 {
            return;
        }

        self.history.pop();
        // Re-shown below, which pushes it again.
        let Some(previous) = self.history.pop() else {
            return;
        };

        match (previous, self.current_worker.clone()) {
            (Screen::WorkerProfile, Some(worker)) => self.show_worker_profile(worker),
            _ => self.show_screen(previous),
        }
    }

    /// Flip between light and dark; returns the new variant.
    pub fn toggle_theme(&mut self) -> ThemeVariant {
        self.theme = self.theme.toggled();
        info!("Theme toggled. dark: {}", self.theme.is_dark());
        self.theme
    }

    pub fn set_user_role(&mut self, role: UserRole) {
        self.user_role = role;
        info!("User role set to: {}", role.name());
    }

    pub fn user_role(&self) -> UserRole {
        self.user_role
    }

    pub fn theme(&self) -> ThemeVariant {
        self.theme
    }

    /// Screen currently displayed.
    pub fn active_screen(&self) -> Screen {
        self.history.last().copied().unwrap_or(Screen::Welcome)
    }

    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn current_worker(&self) -> Option<&WorkerProfile> {
        self.current_worker.as_ref()
    }

    fn push(&mut self, screen: Screen) {
        if self.history.last() != Some(&screen) {
            self.history.push(screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_workers;
    use proptest::prelude::*;

    fn no_adjacent_duplicates(history: &[Screen]) -> bool {
        history.windows(2).all(|w| w[0] != w[1])
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.history(), &[Screen::Welcome]);
        assert_eq!(state.active_screen(), Screen::Welcome);
        assert!(!state.can_go_back());
        assert_eq!(state.theme(), ThemeVariant::Light);
        assert_eq!(state.user_role(), UserRole::Client);
        assert!(state.current_worker().is_none());
    }

    #[test]
    fn test_login_main_back_example() {
        let mut state = AppState::default();
        state.show_screen(Screen::Login);
        assert_eq!(state.history(), &[Screen::Welcome, Screen::Login]);

        state.show_screen(Screen::Main);
        assert_eq!(state.history(), &[Screen::Welcome, Screen::Login, Screen::Main]);

        state.go_back();
        assert_eq!(state.active_screen(), Screen::Login);
        assert_eq!(state.history(), &[Screen::Welcome, Screen::Login]);
    }

    #[test]
    fn test_show_screen_sequences_keep_invariant() {
        let sequence = [
            Screen::Login,
            Screen::Login,
            Screen::Main,
            Screen::Profile,
            Screen::Profile,
            Screen::Main,
            Screen::EditProfileClient,
            Screen::Main,
            Screen::Main,
            Screen::Welcome,
        ];

        let mut state = AppState::default();
        for screen in sequence {
            state.show_screen(screen);
            assert_eq!(state.history().last(), Some(&screen));
            assert_eq!(state.active_screen(), screen);
            assert!(no_adjacent_duplicates(state.history()));
        }
    }

    #[test]
    fn test_go_back_three_times() {
        let mut state = AppState::default();
        state.show_screen(Screen::Login);
        state.show_screen(Screen::Main);
        let history = state.history().to_vec();
        assert_eq!(history, vec![Screen::Welcome, Screen::Login, Screen::Main]);

        state.go_back();
        assert_eq!(state.active_screen(), Screen::Login);

        state.go_back();
        assert_eq!(state.active_screen(), Screen::Welcome);
        assert_eq!(state.history().len(), 1);

        state.go_back();
        assert_eq!(state.active_screen(), Screen::Welcome);
        assert_eq!(state.history(), &[Screen::Welcome]);
    }

    #[test]
    fn test_unregistered_and_unknown_ids_are_ignored() {
        let mut state = AppState::default();
        state.show_screen(Screen::WorkerProfile);
        assert_eq!(state.history(), &[Screen::Welcome]);

        state.show_screen_id("settings");
        state.show_screen_id("");
        assert_eq!(state.history(), &[Screen::Welcome]);

        state.show_screen_id("login");
        assert_eq!(state.active_screen(), Screen::Login);
    }

    #[test]
    fn test_screen_ids_round_trip() {
        for screen in Screen::REGISTERED.iter().chain([Screen::WorkerProfile].iter()) {
            assert!(!screen.id().is_empty());
            assert_eq!(Screen::from_id(screen.id()), Some(*screen));
        }
        assert!(!Screen::WorkerProfile.has_top_bar());
        assert!(Screen::Main.has_top_bar());
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut state = AppState::new(ThemeVariant::Dark);
        assert_eq!(state.toggle_theme(), ThemeVariant::Light);
        assert_eq!(state.toggle_theme(), ThemeVariant::Dark);
        assert_eq!(state.theme(), ThemeVariant::Dark);
    }

    #[test]
    fn test_user_role() {
        let mut state = AppState::default();
        state.set_user_role(UserRole::Worker);
        assert_eq!(state.user_role(), UserRole::Worker);
        state.set_user_role(UserRole::Client);
        assert_eq!(state.user_role(), UserRole::Client);
    }

    #[test]
    fn test_worker_profile_then_main() {
        let workers = sample_workers();
        let mut state = AppState::default();
        state.show_screen(Screen::Login);
        state.show_screen(Screen::Main);

        state.show_worker_profile(workers[0].clone());
        assert_eq!(state.active_screen(), Screen::WorkerProfile);
        assert_eq!(state.current_worker().map(|w| w.name.as_str()), Some("Mohamed Hassan"));

        state.show_screen(Screen::Main);
        assert_eq!(state.active_screen(), Screen::Main);
        assert!(state.active_screen().has_top_bar());
        assert!(no_adjacent_duplicates(state.history()));
        assert_eq!(
            state.history(),
            &[Screen::Welcome, Screen::Login, Screen::Main, Screen::WorkerProfile, Screen::Main]
        );
    }

    #[test]
    fn test_showing_another_worker_replaces_current() {
        let workers = sample_workers();
        let mut state = AppState::default();
        state.show_screen(Screen::Main);
        state.show_worker_profile(workers[0].clone());
        state.show_worker_profile(workers[1].clone());

        assert_eq!(state.current_worker(), Some(&workers[1]));
        assert_eq!(state.history(), &[Screen::Welcome, Screen::Main, Screen::WorkerProfile]);
    }

    #[test]
    fn test_back_from_worker_profile() {
        let workers = sample_workers();
        let mut state = AppState::default();
        state.show_screen(Screen::Main);
        state.show_worker_profile(workers[2].clone());

        state.go_back();
        assert_eq!(state.active_screen(), Screen::Main);
        assert_eq!(state.history(), &[Screen::Welcome, Screen::Main]);
    }

    #[test]
    fn test_back_into_worker_profile_restores_it() {
        let workers = sample_workers();
        let mut state = AppState::default();
        state.show_screen(Screen::Main);
        state.show_worker_profile(workers[1].clone());
        state.show_screen(Screen::Main);

        state.go_back();
        assert_eq!(state.active_screen(), Screen::WorkerProfile);
        assert_eq!(state.current_worker(), Some(&workers[1]));
        assert_eq!(state.history(), &[Screen::Welcome, Screen::Main, Screen::WorkerProfile]);
        assert!(no_adjacent_duplicates(state.history()));
    }

    #[derive(Debug, Clone)]
    enum Nav {
        Show(Screen),
        OpenWorker(usize),
        Back,
    }

    fn screen_strategy() -> impl Strategy<Value = Screen> {
        prop_oneof![
            Just(Screen::Welcome),
            Just(Screen::Login),
            Just(Screen::Main),
            Just(Screen::Profile),
            Just(Screen::EditProfileClient),
            Just(Screen::WorkerProfile),
        ]
    }

    fn nav_strategy() -> impl Strategy<Value = Nav> {
        prop_oneof![
            3 => screen_strategy().prop_map(Nav::Show),
            1 => (0usize..8).prop_map(Nav::OpenWorker),
            2 => Just(Nav::Back),
        ]
    }

    proptest! {
        /// History stays non-empty, free of adjacent duplicates, and its
        /// last entry is always the active screen.
        #[test]
        fn history_invariants_hold(steps in proptest::collection::vec(nav_strategy(), 0..40)) {
            let workers = sample_workers();
            let mut state = AppState::default();

            for step in steps {
                match step {
                    Nav::Show(screen) => {
                        let before = state.history().to_vec();
                        state.show_screen(screen);
                        if screen.is_registered() {
                            prop_assert_eq!(state.active_screen(), screen);
                        } else {
                            prop_assert_eq!(state.history(), before.as_slice());
                        }
                    }
                    Nav::OpenWorker(i) => {
                        let worker = workers[i % workers.len()].clone();
                        state.show_worker_profile(worker.clone());
                        prop_assert_eq!(state.active_screen(), Screen::WorkerProfile);
                        prop_assert_eq!(state.current_worker(), Some(&worker));
                    }
                    Nav::Back => state.go_back(),
                }

                prop_assert!(!state.history().is_empty());
                prop_assert!(no_adjacent_duplicates(state.history()));
                prop_assert_eq!(state.history().last().copied(), Some(state.active_screen()));
                prop_assert_eq!(state.history()[0], Screen::Welcome);
            }
        }
    }
}
