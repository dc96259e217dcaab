//! Data models for the library catalog

pub mod author;
pub mod book;
pub mod borrowing;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, CreateBook};
pub use borrowing::{Borrowing, CreateBorrowing};
