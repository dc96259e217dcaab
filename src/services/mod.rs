//! Business logic services
//!
//! [`Catalog`] is the one interface both the REST handlers and the GraphQL
//! resolvers are written against.

pub mod catalog;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Author, Book, Borrowing, CreateBook, CreateBorrowing},
};

pub use catalog::CatalogService;

/// Shared handle used by the API layers
pub type SharedCatalog = Arc<dyn Catalog>;

/// Lookups, relationship traversals and mutations over the library catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    async fn list_books(&self) -> AppResult<Vec<Book>>;

    async fn list_borrowings(&self) -> AppResult<Vec<Borrowing>>;

    async fn find_author_by_id(&self, id: i32) -> AppResult<Author>;

    async fn find_book_by_id(&self, id: i32) -> AppResult<Book>;

    /// Books whose author is `author_id`, in catalog order
    async fn books_by_author(&self, author_id: i32) -> AppResult<Vec<Book>>;

    /// Author of a book; `NotFound` if the book or its author is missing.
    /// The API layers resolve from an already-loaded book instead, since a
    /// dangling author must come back as null there.
    async fn author_of_book(&self, book_id: i32) -> AppResult<Author>;

    async fn borrowings_for_book(&self, book_id: i32) -> AppResult<Vec<Borrowing>>;

    /// Book of a borrowing; `NotFound` if the borrowing or its book is missing.
    /// Like `author_of_book`, for callers holding only the ID.
    async fn book_of_borrowing(&self, borrowing_id: i32) -> AppResult<Book>;

    /// Record a new borrowing dated today. The book ID is not checked.
    async fn create_borrowing(&self, data: CreateBorrowing) -> AppResult<Borrowing>;

    /// Mark a borrowing as returned. Returning twice is not an error.
    async fn return_borrowing(&self, borrowing_id: i32) -> AppResult<Borrowing>;

    /// Add a book to the catalog. The author ID is not checked.
    async fn create_book(&self, data: CreateBook) -> AppResult<Book>;
}
