//! Local Library catalog
//!
//! Genre, author, book and book-copy pages over PostgreSQL. Handlers build a
//! [`views::View`] (template name plus JSON context) and hand it to the
//! configured [`views::Renderer`].

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub renderer: Arc<dyn views::Renderer>,
}
