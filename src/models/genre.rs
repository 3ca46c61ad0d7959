//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Genre record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

/// Genre creation form, as submitted by the browser
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct GenreForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Genre name required"))]
    pub name: String,
}

/// Genre as handed to the views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenreView {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

pub fn genre_url(id: Uuid) -> String {
    format!("/catalog/genre/{}", id)
}

impl From<&Genre> for GenreView {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
            url: genre_url(genre.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_url() {
        let id = Uuid::new_v4();
        assert_eq!(genre_url(id), format!("/catalog/genre/{}", id));
    }

    #[test]
    fn test_form_requires_name() {
        assert!(GenreForm { name: String::new() }.validate().is_err());
        assert!(GenreForm { name: "Poetry".into() }.validate().is_ok());
    }
}
