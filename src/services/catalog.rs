//! Catalog service backed by the in-memory repository

use async_trait::async_trait;
use chrono::Utc;

use super::Catalog;
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, Borrowing, CreateBook, CreateBorrowing},
    repository::Repository,
};

pub(crate) const AUTHOR_NOT_FOUND: &str = "Author not found!";
pub(crate) const BOOK_NOT_FOUND: &str = "Book not found!";
pub(crate) const BORROWING_NOT_FOUND: &str = "Borrowing not found";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Catalog for CatalogService {
    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        Ok(self.repository.authors_list().await)
    }

    async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books_list().await)
    }

    async fn list_borrowings(&self) -> AppResult<Vec<Borrowing>> {
        Ok(self.repository.borrowings_list().await)
    }

    async fn find_author_by_id(&self, id: i32) -> AppResult<Author> {
        tracing::debug!("Looking up author {}", id);
        self.repository
            .authors_get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(AUTHOR_NOT_FOUND.to_string()))
    }

    async fn find_book_by_id(&self, id: i32) -> AppResult<Book> {
        tracing::debug!("Looking up book {}", id);
        self.repository
            .books_get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    async fn books_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        tracing::debug!("Listing books of author {}", author_id);
        Ok(self.repository.books_by_author(author_id).await)
    }

    async fn author_of_book(&self, book_id: i32) -> AppResult<Author> {
        tracing::debug!("Resolving author of book {}", book_id);
        let book = self.find_book_by_id(book_id).await?;
        self.find_author_by_id(book.author_id).await
    }

    async fn borrowings_for_book(&self, book_id: i32) -> AppResult<Vec<Borrowing>> {
        tracing::debug!("Listing borrowings of book {}", book_id);
        Ok(self.repository.borrowings_by_book(book_id).await)
    }

    async fn book_of_borrowing(&self, borrowing_id: i32) -> AppResult<Book> {
        tracing::debug!("Resolving book of borrowing {}", borrowing_id);
        let borrowing = self
            .repository
            .borrowings_get_by_id(borrowing_id)
            .await
            .ok_or_else(|| AppError::NotFound(BORROWING_NOT_FOUND.to_string()))?;
        self.find_book_by_id(borrowing.book_id).await
    }

    async fn create_borrowing(&self, data: CreateBorrowing) -> AppResult<Borrowing> {
        let today = Utc::now().date_naive();
        let borrowing = self.repository.borrowings_append(&data, today).await;
        tracing::info!(
            "Borrowing {} created: book {} for {}",
            borrowing.id,
            borrowing.book_id,
            borrowing.user_name
        );
        Ok(borrowing)
    }

    async fn return_borrowing(&self, borrowing_id: i32) -> AppResult<Borrowing> {
        let borrowing = self
            .repository
            .borrowings_mark_returned(borrowing_id)
            .await
            .ok_or_else(|| AppError::NotFound(BORROWING_NOT_FOUND.to_string()))?;
        tracing::info!("Borrowing {} returned", borrowing.id);
        Ok(borrowing)
    }

    async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.books_append(&data).await;
        tracing::info!("Book {} added: {}", book.id, book.title);
        Ok(book)
    }
}
