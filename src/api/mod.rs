//! REST API handlers and router

pub mod authors;
pub mod books;
pub mod borrowings;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{graphql, AppState};

/// Path IDs are taken as strings so a non-numeric ID gets a JSON error body
/// instead of the extractor's plain-text rejection.
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Create the application router: REST routes, GraphQL endpoint and docs
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let graphql_route = if state.config.graphql.playground {
        get(graphql::graphiql).post(graphql::graphql_handler)
    } else {
        post(graphql::graphql_handler)
    };

    let api = Router::new()
        .route("/health", get(health::health_check))
        // Authors
        .route("/authors", get(authors::list_authors))
        .route("/authors/:id", get(authors::get_author))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id/author", get(books::get_book_author))
        // Borrowings
        .route(
            "/borrowings",
            get(borrowings::list_borrowings).post(borrowings::create_borrowing),
        )
        // GraphQL
        .route(graphql::GRAPHQL_PATH, graphql_route)
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
