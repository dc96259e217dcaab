//! Book domain methods on Repository

use super::Repository;
use crate::models::{Book, CreateBook};

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> Vec<Book> {
        self.data.read().await.books.clone()
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i32) -> Option<Book> {
        self.data
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Books written by the given author
    pub async fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.data
            .read()
            .await
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Append a new book. The author ID is stored as given.
    pub async fn books_append(&self, data: &CreateBook) -> Book {
        let mut catalog = self.data.write().await;
        let book = Book {
            id: catalog.allocate_book_id(),
            title: data.title.clone(),
            author_id: data.author_id,
            pages: data.pages,
            year: data.year,
        };
        catalog.books.push(book.clone());
        book
    }
}
