//! Catalog service: genres, authors and book copies

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookInstance, Genre},
    repository::CatalogStore,
};

/// What `find_or_create_genre` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreCreation {
    /// A genre with the same name already existed
    Existing(Genre),
    Created(Genre),
}

impl GenreCreation {
    pub fn genre(&self) -> &Genre {
        match self {
            GenreCreation::Existing(genre) | GenreCreation::Created(genre) => genre,
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Check that the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// All genres sorted by name
    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.store.genres_list().await
    }

    /// Genre and its books, fetched concurrently.
    pub async fn genre_detail(&self, id: Uuid) -> AppResult<(Genre, Vec<Book>)> {
        tracing::debug!("Loading genre {} and its books", id);
        let (genre, books) = tokio::try_join!(
            self.store.genres_get_by_id(id),
            self.store.books_by_genre(id),
        )?;
        let genre = genre.ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;
        Ok((genre, books))
    }

    /// Return the genre named exactly `name`, creating it when none exists.
    ///
    /// `name` must already be sanitized.
    pub async fn find_or_create_genre(&self, name: &str) -> AppResult<GenreCreation> {
        if let Some(existing) = self.store.genres_find_by_name(name).await? {
            tracing::info!("Genre {:?} already exists (id={})", name, existing.id);
            return Ok(GenreCreation::Existing(existing));
        }

        let created = self.store.genres_create(name).await?;
        tracing::info!("Created genre {:?} (id={})", name, created.id);
        Ok(GenreCreation::Created(created))
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.store.authors_list().await
    }

    /// Author and their books, fetched concurrently.
    pub async fn author_detail(&self, id: Uuid) -> AppResult<(Author, Vec<Book>)> {
        let (author, books) = tokio::try_join!(
            self.store.authors_get_by_id(id),
            self.store.books_by_author(id),
        )?;
        let author = author.ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;
        Ok((author, books))
    }

    pub async fn list_book_instances(&self) -> AppResult<Vec<BookInstance>> {
        self.store.book_instances_list().await
    }

    pub async fn book_instance_detail(&self, id: Uuid) -> AppResult<BookInstance> {
        self.store
            .book_instances_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book copy not found".to_string()))
    }
}
