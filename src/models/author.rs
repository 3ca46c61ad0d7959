//! Author model and derived display fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::format_date_med;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Author with derived fields, as handed to the views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorView {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    /// "Family, First", or empty when either part is missing
    pub name: String,
    pub url: String,
    pub lifespan: String,
}

/// "<family>, <first>" when both parts are present, empty otherwise.
pub fn full_name(first_name: &str, family_name: &str) -> String {
    if first_name.is_empty() || family_name.is_empty() {
        return String::new();
    }
    format!("{}, {}", family_name, first_name)
}

pub fn author_url(id: Uuid) -> String {
    format!("/catalog/author/{}", id)
}

/// Birth date in medium format; the death date is not rendered.
pub fn lifespan(date_of_birth: Option<NaiveDate>, _date_of_death: Option<NaiveDate>) -> String {
    date_of_birth.map(format_date_med).unwrap_or_default()
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            name: full_name(&author.first_name, &author.family_name),
            url: author_url(author.id),
            lifespan: lifespan(author.date_of_birth, author.date_of_death),
        }
    }
}
