//! Genre pages: list, detail, create form and the unimplemented update/delete

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde_json::json;
use validator::Validate;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{genre::genre_url, BookView, GenreForm, GenreView},
    validation::{escape_html, field_errors, run_stages, FieldError, Flow},
    views::{RenderedView, View},
    AppState,
};

use super::parse_id;

/// List all genres
#[utoipa::path(
    get,
    path = "/catalog/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genres sorted by name", body = RenderedView),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
pub async fn genre_list(State(state): State<AppState>) -> AppResult<Response> {
    let genres = state.services.catalog.list_genres().await?;
    let genre_list: Vec<GenreView> = genres.iter().map(GenreView::from).collect();

    state.renderer.render(View::new(
        "genre_list",
        json!({ "title": "Genre List", "genre_list": genre_list }),
    ))
}

/// Genre with its books
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}",
    tag = "genres",
    params(("id" = String, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre and its books", body = RenderedView),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    )
)]
pub async fn genre_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Genre not found")?;
    let (genre, books) = state.services.catalog.genre_detail(id).await?;
    let genre_books: Vec<BookView> = books.iter().map(BookView::from).collect();

    state.renderer.render(View::new(
        "genre_detail",
        json!({
            "title": "Genre Detail",
            "genre": GenreView::from(&genre),
            "genre_books": genre_books,
        }),
    ))
}

/// Blank creation form
#[utoipa::path(
    get,
    path = "/catalog/genre/create",
    tag = "genres",
    responses((status = 200, description = "Genre form", body = RenderedView))
)]
pub async fn genre_create_get(State(state): State<AppState>) -> AppResult<Response> {
    state
        .renderer
        .render(View::new("genre_form", json!({ "title": "Create Genre" })))
}

/// A genre form on its way through the create pipeline
#[derive(Debug, Clone, Default)]
pub struct GenreSubmission {
    pub name: String,
    pub errors: Vec<FieldError>,
}

impl From<GenreForm> for GenreSubmission {
    fn from(form: GenreForm) -> Self {
        Self {
            name: form.name,
            errors: Vec::new(),
        }
    }
}

/// Drop leading and trailing whitespace.
fn trim_name(mut submission: GenreSubmission) -> Flow<GenreSubmission, View> {
    submission.name = submission.name.trim().to_string();
    Flow::Continue(submission)
}

/// Check field rules, recording failures without stopping.
fn validate_name(mut submission: GenreSubmission) -> Flow<GenreSubmission, View> {
    let form = GenreForm {
        name: submission.name.clone(),
    };
    if let Err(errors) = form.validate() {
        let value = submission.name.clone();
        submission.errors = field_errors(&errors, |_| value.clone());
    }
    Flow::Continue(submission)
}

fn escape_name(mut submission: GenreSubmission) -> Flow<GenreSubmission, View> {
    submission.name = escape_html(&submission.name);
    Flow::Continue(submission)
}

/// Send the form back with the user's value when any rule failed.
fn reject_invalid(submission: GenreSubmission) -> Flow<GenreSubmission, View> {
    if submission.errors.is_empty() {
        return Flow::Continue(submission);
    }
    Flow::Respond(View::new(
        "genre_form",
        json!({
            "title": "Create Genre",
            "genre": { "name": submission.name },
            "errors": submission.errors,
        }),
    ))
}

/// Stages applied to a submitted genre form, in order
const CREATE_GENRE_STAGES: [fn(GenreSubmission) -> Flow<GenreSubmission, View>; 4] =
    [trim_name, validate_name, escape_name, reject_invalid];

/// Sanitize and validate a submitted form.
///
/// `Continue` carries a submission whose name is trimmed, escaped and valid;
/// `Respond` carries the form to show again.
pub fn create_genre_pipeline(form: GenreForm) -> Flow<GenreSubmission, View> {
    run_stages(GenreSubmission::from(form), &CREATE_GENRE_STAGES)
}

/// Create a genre, or reuse the one with the same name
#[utoipa::path(
    post,
    path = "/catalog/genre/create",
    tag = "genres",
    request_body(content = GenreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Form shown again with validation errors", body = RenderedView),
        (status = 303, description = "Redirect to the new or existing genre")
    )
)]
pub async fn genre_create_post(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let submission = match create_genre_pipeline(form) {
        Flow::Continue(submission) => submission,
        Flow::Respond(view) => return state.renderer.render(view),
    };

    let outcome = state
        .services
        .catalog
        .find_or_create_genre(&submission.name)
        .await?;

    Ok(Redirect::to(&genre_url(outcome.genre().id)).into_response())
}

pub async fn genre_delete_get() -> &'static str {
    "NOT IMPLEMENTED: Genre delete GET"
}

pub async fn genre_delete_post() -> &'static str {
    "NOT IMPLEMENTED: Genre delete POST"
}

pub async fn genre_update_get() -> &'static str {
    "NOT IMPLEMENTED: Genre update GET"
}

pub async fn genre_update_post() -> &'static str {
    "NOT IMPLEMENTED: Genre update POST"
}
