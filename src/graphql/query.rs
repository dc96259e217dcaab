//! Root query resolvers

use async_graphql::{Context, Object, Result};

use super::catalog;
use crate::{
    error::OptionalExt,
    models::{Author, Book, Borrowing},
};

/// Root query object
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        Ok(catalog(ctx)?.list_authors().await?)
    }

    /// Get all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(catalog(ctx)?.list_books().await?)
    }

    /// Get all borrowings
    async fn borrowings(&self, ctx: &Context<'_>) -> Result<Vec<Borrowing>> {
        Ok(catalog(ctx)?.list_borrowings().await?)
    }

    /// Get a single author, null if there is none with this ID
    async fn author(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Author>> {
        Ok(catalog(ctx)?.find_author_by_id(id).await.optional()?)
    }

    /// Get a single book, null if there is none with this ID
    async fn book(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Book>> {
        Ok(catalog(ctx)?.find_book_by_id(id).await.optional()?)
    }
}
