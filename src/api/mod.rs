//! HTTP handlers for the catalog pages

pub mod authors;
pub mod book_instances;
pub mod genres;
pub mod health;
pub mod openapi;

use axum::{routing::get, Router};
use uuid::Uuid;

use crate::{error::AppError, AppState};

/// Parse a record id taken from the path.
///
/// An id that is not a UUID cannot name a record, so it is reported the same
/// way as a missing one.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}

/// Catalog and health routes with state applied
pub fn router(state: AppState) -> Router {
    let catalog = Router::new()
        // Genres
        .route("/genres", get(genres::genre_list))
        .route(
            "/genre/create",
            get(genres::genre_create_get).post(genres::genre_create_post),
        )
        .route("/genre/:id", get(genres::genre_detail))
        .route(
            "/genre/:id/delete",
            get(genres::genre_delete_get).post(genres::genre_delete_post),
        )
        .route(
            "/genre/:id/update",
            get(genres::genre_update_get).post(genres::genre_update_post),
        )
        // Authors
        .route("/authors", get(authors::author_list))
        .route("/author/:id", get(authors::author_detail))
        // Book copies
        .route("/bookinstances", get(book_instances::book_instance_list))
        .route("/bookinstance/:id", get(book_instances::book_instance_detail));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/catalog", catalog)
        .with_state(state)
}
