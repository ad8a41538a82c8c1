//! Screens, shared widgets and the application shell.

pub mod app;
pub mod components;
pub mod edit_profile;
pub mod home;
pub mod login;
pub mod profile;
pub mod welcome;
pub mod worker_profile;

pub use app::{Action, SkillDarApp};
