//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, borrowings, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "1.0.0",
        description = "API for managing a library"
    ),
    paths(
        health::health_check,
        authors::list_authors,
        authors::get_author,
        books::list_books,
        books::get_book,
        books::get_book_author,
        borrowings::list_borrowings,
        borrowings::create_borrowing,
    ),
    components(
        schemas(
            crate::models::Author,
            crate::models::Book,
            crate::models::Borrowing,
            crate::models::CreateBorrowing,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Authors"),
        (name = "books", description = "Books and their authors"),
        (name = "borrowings", description = "Borrowing records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
