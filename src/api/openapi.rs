//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, book_instances, genres, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Local Library",
        version = "0.1.0",
        description = "Library catalog: genres, authors and book copies",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Genres
        genres::genre_list,
        genres::genre_detail,
        genres::genre_create_get,
        genres::genre_create_post,
        // Authors
        authors::author_list,
        authors::author_detail,
        // Book copies
        book_instances::book_instance_list,
        book_instances::book_instance_detail,
    ),
    components(
        schemas(
            crate::models::Genre,
            crate::models::GenreForm,
            crate::models::GenreView,
            crate::models::Author,
            crate::models::AuthorView,
            crate::models::Book,
            crate::models::BookView,
            crate::models::BookInstance,
            crate::models::BookInstanceStatus,
            crate::models::BookInstanceView,
            crate::validation::FieldError,
            crate::views::RenderedView,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "genres", description = "Genre pages"),
        (name = "authors", description = "Author pages"),
        (name = "bookinstances", description = "Book copy pages")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_genre_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/catalog/genres"));
        assert!(doc.paths.paths.contains_key("/catalog/genre/{id}"));
    }
}
