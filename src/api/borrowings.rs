//! Borrowing endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{Borrowing, CreateBorrowing},
};

/// List all borrowings
#[utoipa::path(
    get,
    path = "/borrowings",
    tag = "borrowings",
    responses(
        (status = 200, description = "All borrowings", body = Vec<Borrowing>)
    )
)]
pub async fn list_borrowings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Borrowing>>> {
    let borrowings = state.catalog.list_borrowings().await?;
    Ok(Json(borrowings))
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrowings",
    tag = "borrowings",
    request_body = CreateBorrowing,
    responses(
        (status = 201, description = "Borrowing created", body = Borrowing),
        (
            status = 400,
            description = "Body is not a borrowing request",
            body = crate::error::ErrorResponse
        )
    )
)]
pub async fn create_borrowing(
    State(state): State<crate::AppState>,
    payload: Result<Json<CreateBorrowing>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Borrowing>)> {
    // Keep malformed bodies on the `{ "error": ... }` response shape
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let borrowing = state.catalog.create_borrowing(request).await?;
    Ok((StatusCode::CREATED, Json(borrowing)))
}
