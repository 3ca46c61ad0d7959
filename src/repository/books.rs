//! Book lookups on Repository

use uuid::Uuid;

use super::Repository;
use crate::{error::AppResult, models::Book};

const BOOK_COLUMNS: &str = "id, title, author_id, summary, isbn, genre_id";

impl Repository {
    /// Books filed under a genre, by title
    pub async fn books_find_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        let query = format!(
            "SELECT {} FROM books WHERE genre_id = $1 ORDER BY title",
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(genre_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Books written by an author, by title
    pub async fn books_find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        let query = format!(
            "SELECT {} FROM books WHERE author_id = $1 ORDER BY title",
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
