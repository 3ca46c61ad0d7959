//! Data models for the catalog
//!
//! Stored rows live next to their read views. Derived display fields
//! (URLs, full names, formatted dates) are plain functions over stored
//! fields and are recomputed each time a view is built.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use chrono::NaiveDate;

// Re-export commonly used types
pub use author::{Author, AuthorView};
pub use book::{Book, BookView};
pub use book_instance::{BookInstance, BookInstanceStatus, BookInstanceView};
pub use genre::{Genre, GenreForm, GenreView};

/// Medium localized date, e.g. "Dec 2, 2022"
pub fn format_date_med(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
