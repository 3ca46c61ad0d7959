//! Book instance (physical copy) model and derived display fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{book::book_url, format_date_med};

/// Availability of a copy (Postgres enum `book_instance_status`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(type_name = "book_instance_status")]
pub enum BookInstanceStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl Default for BookInstanceStatus {
    fn default() -> Self {
        BookInstanceStatus::Maintenance
    }
}

impl std::fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// Full book instance model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Uuid,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: DateTime<Utc>,
}

/// Book instance with derived fields, as handed to the views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookInstanceView {
    pub id: Uuid,
    pub book_id: Uuid,
    pub book_url: String,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: DateTime<Utc>,
    pub due_back_formatted: String,
    pub url: String,
}

pub fn book_instance_url(id: Uuid) -> String {
    format!("/catalog/bookinstance/{}", id)
}

pub fn due_back_formatted(due_back: DateTime<Utc>) -> String {
    format_date_med(due_back.date_naive())
}

impl From<&BookInstance> for BookInstanceView {
    fn from(instance: &BookInstance) -> Self {
        Self {
            id: instance.id,
            book_id: instance.book_id,
            book_url: book_url(instance.book_id),
            imprint: instance.imprint.clone(),
            status: instance.status,
            due_back: instance.due_back,
            due_back_formatted: due_back_formatted(instance.due_back),
            url: book_instance_url(instance.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn copy_due(year: i32, month: u32, day: u32) -> BookInstance {
        BookInstance {
            id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            imprint: "Penguin, 2003".to_string(),
            status: BookInstanceStatus::default(),
            due_back: Utc.with_ymd_and_hms(year, month, day, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_default_status() {
        assert_eq!(BookInstanceStatus::default(), BookInstanceStatus::Maintenance);
        assert_eq!(BookInstanceStatus::Loaned.to_string(), "Loaned");
    }

    #[test]
    fn test_due_back_formatted() {
        let copy = copy_due(2022, 12, 2);
        assert_eq!(BookInstanceView::from(&copy).due_back_formatted, "Dec 2, 2022");
    }

    #[test]
    fn test_due_back_follows_stored_value() {
        let mut copy = copy_due(2022, 12, 2);
        assert_eq!(BookInstanceView::from(&copy).due_back_formatted, "Dec 2, 2022");

        copy.due_back = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(BookInstanceView::from(&copy).due_back_formatted, "Jan 15, 2023");
    }

    #[test]
    fn test_urls() {
        let copy = copy_due(2022, 12, 2);
        let view = BookInstanceView::from(&copy);
        assert_eq!(view.url, format!("/catalog/bookinstance/{}", copy.id));
        assert_eq!(view.book_url, format!("/catalog/book/{}", copy.book_id));
    }
}
