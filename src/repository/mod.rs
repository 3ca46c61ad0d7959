//! Repository layer for database operations

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, Book, BookInstance, Genre},
};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Catalog queries used by the services.
///
/// `Option` results mean the query ran and matched nothing; errors are
/// reserved for query execution failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn ping(&self) -> AppResult<()>;

    /// All genres, sorted by name ascending
    async fn genres_list(&self) -> AppResult<Vec<Genre>>;
    async fn genres_get_by_id(&self, id: Uuid) -> AppResult<Option<Genre>>;
    /// Genre whose name is exactly `name`
    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;
    async fn genres_create(&self, name: &str) -> AppResult<Genre>;

    async fn books_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>>;
    async fn books_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>>;

    /// All authors, sorted by family name then first name
    async fn authors_list(&self) -> AppResult<Vec<Author>>;
    async fn authors_get_by_id(&self, id: Uuid) -> AppResult<Option<Author>>;

    async fn book_instances_list(&self) -> AppResult<Vec<BookInstance>>;
    async fn book_instances_get_by_id(&self, id: Uuid) -> AppResult<Option<BookInstance>>;
}

#[async_trait]
impl CatalogStore for Repository {
    async fn ping(&self) -> AppResult<()> {
        Repository::ping(self).await
    }

    async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        self.genres_list_sorted().await
    }

    async fn genres_get_by_id(&self, id: Uuid) -> AppResult<Option<Genre>> {
        self.genres_find_by_id(id).await
    }

    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        self.genres_find_one_by_name(name).await
    }

    async fn genres_create(&self, name: &str) -> AppResult<Genre> {
        self.genres_insert(name).await
    }

    async fn books_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        self.books_find_by_genre(genre_id).await
    }

    async fn books_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        self.books_find_by_author(author_id).await
    }

    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        self.authors_list_sorted().await
    }

    async fn authors_get_by_id(&self, id: Uuid) -> AppResult<Option<Author>> {
        self.authors_find_by_id(id).await
    }

    async fn book_instances_list(&self) -> AppResult<Vec<BookInstance>> {
        self.book_instances_list_all().await
    }

    async fn book_instances_get_by_id(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        self.book_instances_find_by_id(id).await
    }
}
