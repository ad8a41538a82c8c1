pub mod config;
pub mod connectivity;
pub mod error;
pub mod models;
pub mod state;
pub mod theme;
pub mod ui;

pub use error::{AppError, Result};
