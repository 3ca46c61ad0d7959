//! Book instance (copy) lookups on Repository

use uuid::Uuid;

use super::Repository;
use crate::{error::AppResult, models::BookInstance};

impl Repository {
    pub async fn book_instances_list_all(&self) -> AppResult<Vec<BookInstance>> {
        let rows = sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, status, due_back FROM book_instances ORDER BY due_back",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn book_instances_find_by_id(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        let row = sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, status, due_back FROM book_instances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
