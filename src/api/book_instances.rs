//! Book copy pages

use axum::{
    extract::{Path, State},
    response::Response,
};
use serde_json::json;

use crate::{
    error::{AppResult, ErrorResponse},
    models::BookInstanceView,
    views::{RenderedView, View},
    AppState,
};

use super::parse_id;

/// List all book copies
#[utoipa::path(
    get,
    path = "/catalog/bookinstances",
    tag = "bookinstances",
    responses((status = 200, description = "Book copies", body = RenderedView))
)]
pub async fn book_instance_list(State(state): State<AppState>) -> AppResult<Response> {
    let instances = state.services.catalog.list_book_instances().await?;
    let bookinstance_list: Vec<BookInstanceView> =
        instances.iter().map(BookInstanceView::from).collect();

    state.renderer.render(View::new(
        "bookinstance_list",
        json!({ "title": "Book Instance List", "bookinstance_list": bookinstance_list }),
    ))
}

/// One book copy
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}",
    tag = "bookinstances",
    params(("id" = String, Path, description = "Book instance ID")),
    responses(
        (status = 200, description = "Book copy", body = RenderedView),
        (status = 404, description = "Book copy not found", body = ErrorResponse)
    )
)]
pub async fn book_instance_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Book copy not found")?;
    let instance = state.services.catalog.book_instance_detail(id).await?;

    state.renderer.render(View::new(
        "bookinstance_detail",
        json!({
            "title": format!("Copy: {}", instance.imprint),
            "bookinstance": BookInstanceView::from(&instance),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{router, test_support::*},
        models::{BookInstance, BookInstanceStatus},
        repository::MockCatalogStore,
    };
    use axum::http::StatusCode;
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn copy() -> BookInstance {
        BookInstance {
            id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            imprint: "London Gollancz, 2014".to_string(),
            status: BookInstanceStatus::Loaned,
            due_back: Utc.with_ymd_and_hms(2022, 12, 2, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_book_instance_detail() {
        let instance = copy();
        let id = instance.id;

        let mut store = MockCatalogStore::new();
        store
            .expect_book_instances_get_by_id()
            .withf(move |candidate| *candidate == id)
            .returning(move |_| Ok(Some(instance.clone())));

        let response = router(state(store))
            .oneshot(get(&format!("/catalog/bookinstance/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let view = &body["context"]["bookinstance"];
        assert_eq!(body["context"]["title"], "Copy: London Gollancz, 2014");
        assert_eq!(view["status"], "Loaned");
        assert_eq!(view["due_back_formatted"], "Dec 2, 2022");
        assert_eq!(view["url"], format!("/catalog/bookinstance/{}", id));
    }

    #[tokio::test]
    async fn test_book_instance_list() {
        let mut store = MockCatalogStore::new();
        store
            .expect_book_instances_list()
            .returning(|| Ok(vec![copy(), copy()]));

        let response = router(state(store))
            .oneshot(get("/catalog/bookinstances"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["context"]["bookinstance_list"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_book_instance_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_book_instances_get_by_id().returning(|_| Ok(None));

        let response = router(state(store))
            .oneshot(get(&format!("/catalog/bookinstance/{}", Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
