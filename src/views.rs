//! View rendering boundary
//!
//! Handlers describe a page as a template name plus a JSON context and hand it
//! to a [`Renderer`]. The template engine itself lives outside this crate; the
//! bundled [`JsonRenderer`] returns the pair as JSON so any front end (or a
//! test) can render it.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// A page to render: template identifier and its context
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub template: &'static str,
    pub context: Value,
}

impl View {
    /// `context` must be a JSON object; it always carries a `title`.
    pub fn new(template: &'static str, context: Value) -> Self {
        Self { template, context }
    }

    pub fn title(&self) -> Option<&str> {
        self.context.get("title").and_then(Value::as_str)
    }
}

pub trait Renderer: Send + Sync {
    fn render(&self, view: View) -> AppResult<Response>;
}

/// Body produced by [`JsonRenderer`]
#[derive(Debug, Serialize, ToSchema)]
pub struct RenderedView {
    /// Template identifier, e.g. `genre_detail`
    pub template: String,
    /// Template context
    #[schema(value_type = Object)]
    pub context: Value,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: View) -> AppResult<Response> {
        if !view.context.is_object() {
            return Err(AppError::Internal(format!(
                "context for template {} is not an object",
                view.template
            )));
        }
        Ok(Json(RenderedView {
            template: view.template.to_string(),
            context: view.context,
        })
        .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_view_title() {
        let view = View::new("genre_form", json!({ "title": "Create Genre" }));
        assert_eq!(view.title(), Some("Create Genre"));
    }

    #[test]
    fn test_json_renderer() {
        let response = JsonRenderer
            .render(View::new("genre_list", json!({ "title": "Genre List", "genre_list": [] })))
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_json_renderer_rejects_non_object_context() {
        let result = JsonRenderer.render(View::new("genre_list", json!(["not", "an", "object"])));
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
