//! Data models for workers, service categories, and user forms.

pub mod catalog;
pub mod user;
pub mod worker;

pub use catalog::{CATEGORIES, Category, filter_workers, sample_workers};
pub use user::{ClientProfile, LoginForm, UserRole};
pub use worker::WorkerProfile;
