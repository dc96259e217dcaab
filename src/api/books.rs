//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_id;
use crate::{
    error::{AppError, AppResult, OptionalExt},
    models::{Author, Book},
    services::catalog::BOOK_NOT_FOUND,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "ID is not a number", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;
    let book = state.catalog.find_book_by_id(id).await?;
    Ok(Json(book))
}

/// Get the author of a book
///
/// Responds with `null` when the book refers to an author that does not exist.
#[utoipa::path(
    get,
    path = "/books/{id}/author",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Author of the book", body = Author),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_author(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Author>>> {
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;
    let book = state.catalog.find_book_by_id(id).await?;
    let author = state.catalog.find_author_by_id(book.author_id).await.optional()?;
    Ok(Json(author))
}
