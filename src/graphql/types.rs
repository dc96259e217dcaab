//! Relationship fields on the GraphQL object types
//!
//! Dangling foreign keys resolve to null rather than an error.

use async_graphql::{ComplexObject, Context, Result};

use super::catalog;
use crate::{
    error::OptionalExt,
    models::{Author, Book, Borrowing},
};

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(catalog(ctx)?.books_by_author(self.id).await?)
    }
}

#[ComplexObject]
impl Book {
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        Ok(catalog(ctx)?.find_author_by_id(self.author_id).await.optional()?)
    }

    async fn borrowings(&self, ctx: &Context<'_>) -> Result<Vec<Borrowing>> {
        Ok(catalog(ctx)?.borrowings_for_book(self.id).await?)
    }
}

#[ComplexObject]
impl Borrowing {
    async fn book(&self, ctx: &Context<'_>) -> Result<Option<Book>> {
        Ok(catalog(ctx)?.find_book_by_id(self.book_id).await.optional()?)
    }
}
