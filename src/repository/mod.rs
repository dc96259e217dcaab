//! In-memory catalog store
//!
//! Holds the three collections behind a single lock. Every clone of
//! [`Repository`] shares the same data, so the REST and GraphQL sides always
//! see each other's writes.

pub mod authors;
pub mod books;
pub mod borrowings;
mod seed;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Author, Book, Borrowing};

/// Collections plus the id counters for the ones that grow
#[derive(Debug)]
struct CatalogData {
    authors: Vec<Author>,
    books: Vec<Book>,
    borrowings: Vec<Borrowing>,
    next_book_id: i32,
    next_borrowing_id: i32,
}

impl CatalogData {
    /// Take the next book id. Counters only move forward.
    fn allocate_book_id(&mut self) -> i32 {
        let id = self.next_book_id;
        self.next_book_id += 1;
        id
    }

    fn allocate_borrowing_id(&mut self) -> i32 {
        let id = self.next_borrowing_id;
        self.next_borrowing_id += 1;
        id
    }
}

/// Main repository struct holding the shared catalog
#[derive(Clone)]
pub struct Repository {
    data: Arc<RwLock<CatalogData>>,
}

impl Repository {
    /// Create a repository, optionally loaded with the sample catalog
    pub fn new(seed: bool) -> Self {
        if seed {
            Self::seeded()
        } else {
            Self::from_records(Vec::new(), Vec::new(), Vec::new())
        }
    }

    /// Repository loaded with the sample authors, books and borrowings
    pub fn seeded() -> Self {
        Self::from_records(seed::authors(), seed::books(), seed::borrowings())
    }

    /// Build a repository from existing records. Id counters start after the
    /// highest id present in each collection.
    pub fn from_records(
        authors: Vec<Author>,
        books: Vec<Book>,
        borrowings: Vec<Borrowing>,
    ) -> Self {
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let next_borrowing_id = borrowings.iter().map(|b| b.id).max().unwrap_or(0) + 1;

        Self {
            data: Arc::new(RwLock::new(CatalogData {
                authors,
                books,
                borrowings,
                next_book_id,
                next_borrowing_id,
            })),
        }
    }
}
