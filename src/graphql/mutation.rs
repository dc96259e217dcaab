//! Root mutation resolvers

use async_graphql::{Context, Object, Result};

use super::catalog;
use crate::models::{Book, Borrowing, CreateBook, CreateBorrowing};

/// Root mutation object
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new borrowing
    async fn create_borrowing(
        &self,
        ctx: &Context<'_>,
        book_id: i32,
        user_name: String,
    ) -> Result<Borrowing> {
        let data = CreateBorrowing { book_id, user_name };
        Ok(catalog(ctx)?.create_borrowing(data).await?)
    }

    /// Mark a borrowing as returned
    async fn return_book(&self, ctx: &Context<'_>, borrowing_id: i32) -> Result<Borrowing> {
        Ok(catalog(ctx)?.return_borrowing(borrowing_id).await?)
    }

    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author_id: i32,
        pages: i32,
        year: i32,
    ) -> Result<Book> {
        let data = CreateBook {
            title,
            author_id,
            pages,
            year,
        };
        Ok(catalog(ctx)?.create_book(data).await?)
    }
}
