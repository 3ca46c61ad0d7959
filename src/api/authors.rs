//! Author pages

use axum::{
    extract::{Path, State},
    response::Response,
};
use serde_json::json;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{AuthorView, BookView},
    views::{RenderedView, View},
    AppState,
};

use super::parse_id;

/// List all authors
#[utoipa::path(
    get,
    path = "/catalog/authors",
    tag = "authors",
    responses((status = 200, description = "Authors sorted by family name", body = RenderedView))
)]
pub async fn author_list(State(state): State<AppState>) -> AppResult<Response> {
    let authors = state.services.catalog.list_authors().await?;
    let author_list: Vec<AuthorView> = authors.iter().map(AuthorView::from).collect();

    state.renderer.render(View::new(
        "author_list",
        json!({ "title": "Author List", "author_list": author_list }),
    ))
}

/// Author with their books
#[utoipa::path(
    get,
    path = "/catalog/author/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author and their books", body = RenderedView),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Author not found")?;
    let (author, books) = state.services.catalog.author_detail(id).await?;
    let author_books: Vec<BookView> = books.iter().map(BookView::from).collect();

    state.renderer.render(View::new(
        "author_detail",
        json!({
            "title": "Author Detail",
            "author": AuthorView::from(&author),
            "author_books": author_books,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{router, test_support::*},
        models::{Author, Book},
        repository::MockCatalogStore,
    };
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn author(first_name: &str, family_name: &str) -> Author {
        Author {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            family_name: family_name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1775, 12, 16),
            date_of_death: None,
        }
    }

    #[tokio::test]
    async fn test_author_list_includes_derived_fields() {
        let mut store = MockCatalogStore::new();
        store
            .expect_authors_list()
            .returning(|| Ok(vec![author("Jane", "Austen"), author("", "Homer")]));

        let response = router(state(store)).oneshot(get("/catalog/authors")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let list = &body["context"]["author_list"];
        assert_eq!(list[0]["name"], "Austen, Jane");
        assert_eq!(list[0]["lifespan"], "Dec 16, 1775");
        assert_eq!(list[1]["name"], "");
    }

    #[tokio::test]
    async fn test_author_detail_lists_books() {
        let austen = author("Jane", "Austen");
        let id = austen.id;

        let mut store = MockCatalogStore::new();
        store
            .expect_authors_get_by_id()
            .returning(move |_| Ok(Some(austen.clone())));
        store.expect_books_by_author().returning(move |author_id| {
            Ok(vec![Book {
                id: Uuid::new_v4(),
                title: "Emma".to_string(),
                author_id,
                summary: "A comedy of manners.".to_string(),
                isbn: "9780141439587".to_string(),
                genre_id: None,
            }])
        });

        let response = router(state(store))
            .oneshot(get(&format!("/catalog/author/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["template"], "author_detail");
        assert_eq!(body["context"]["author"]["url"], format!("/catalog/author/{}", id));
        assert_eq!(body["context"]["author_books"][0]["title"], "Emma");
    }

    #[tokio::test]
    async fn test_author_detail_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_authors_get_by_id().returning(|_| Ok(None));
        store.expect_books_by_author().returning(|_| Ok(vec![]));

        let response = router(state(store))
            .oneshot(get(&format!("/catalog/author/{}", Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
