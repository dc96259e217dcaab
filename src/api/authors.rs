//! Author endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    models::Author,
    services::catalog::AUTHOR_NOT_FOUND,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.catalog.list_authors().await?;
    Ok(Json(authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Author>> {
    // A non-numeric ID cannot match any author
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(AUTHOR_NOT_FOUND.to_string()))?;
    let author = state.catalog.find_author_by_id(id).await?;
    Ok(Json(author))
}
