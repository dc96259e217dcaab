//! GraphQL API integration tests

use std::sync::Arc;

use async_graphql::{Request, Variables};
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use library_api::{
    api,
    config::AppConfig,
    graphql::{self, LibrarySchema},
    repository::Repository,
    services::{Catalog, CatalogService, SharedCatalog},
    AppState,
};

fn catalog() -> SharedCatalog {
    Arc::new(CatalogService::new(Repository::seeded()))
}

async fn execute(schema: &LibrarySchema, query: &str) -> async_graphql::Response {
    schema.execute(query).await
}

fn into_data(response: async_graphql::Response) -> Value {
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    response.data.into_json().expect("Failed to convert data")
}

#[tokio::test]
async fn test_query_authors() {
    let schema = graphql::build_schema(catalog());

    let data = into_data(execute(&schema, "{ authors { id name country birthYear } }").await);
    assert_eq!(
        data["authors"][2],
        json!({ "id": 3, "name": "Naguib Mahfouz", "country": "Egypt", "birthYear": 1911 })
    );
}

#[tokio::test]
async fn test_query_single_records() {
    let schema = graphql::build_schema(catalog());

    let query = "{ author(id: 2) { name } book(id: 1) { title } }";
    let data = into_data(execute(&schema, query).await);
    assert_eq!(data["author"]["name"], "Agatha Christie");
    assert_eq!(data["book"]["title"], "Les Misérables");
}

#[tokio::test]
async fn test_missing_records_are_null() {
    let schema = graphql::build_schema(catalog());

    let query = "{ author(id: 99) { name } book(id: 99) { title } }";
    let data = into_data(execute(&schema, query).await);
    assert_eq!(data, json!({ "author": null, "book": null }));
}

#[tokio::test]
async fn test_nested_relationships() {
    let schema = graphql::build_schema(catalog());

    let query = r#"
        {
            author(id: 1) {
                books {
                    title
                    author { name }
                    borrowings { userName book { id } }
                }
            }
        }
    "#;
    let data = into_data(execute(&schema, query).await);

    let books = &data["author"]["books"];
    assert_eq!(books.as_array().unwrap().len(), 2);
    assert_eq!(books[0]["author"]["name"], "Victor Hugo");
    assert_eq!(
        books[0]["borrowings"],
        json!([{ "userName": "Ahmed", "book": { "id": 1 } }])
    );
    assert_eq!(books[1]["borrowings"], json!([]));
}

#[tokio::test]
async fn test_dangling_references_are_null() {
    let schema = graphql::build_schema(catalog());

    let data = into_data(
        execute(
            &schema,
            r#"mutation { addBook(title: "Lost", authorId: 50, pages: 12, year: 1999) { id author { name } } }"#,
        )
        .await,
    );
    assert_eq!(data["addBook"], json!({ "id": 5, "author": null }));

    let data = into_data(
        execute(
            &schema,
            r#"mutation { createBorrowing(bookId: 77, userName: "Kamal") { id book { title } } }"#,
        )
        .await,
    );
    assert_eq!(data["createBorrowing"], json!({ "id": 3, "book": null }));
}

#[tokio::test]
async fn test_create_borrowing() {
    let shared = catalog();
    let schema = graphql::build_schema(shared.clone());

    let request = Request::new(
        "mutation Borrow($bookId: Int!, $userName: String!) { createBorrowing(bookId: $bookId, userName: $userName) { id bookId userName returned borrowDate } }",
    )
    .variables(Variables::from_json(json!({ "bookId": 4, "userName": "Mona" })));
    let data = into_data(schema.execute(request).await);

    assert_eq!(data["createBorrowing"]["id"], 3);
    assert_eq!(data["createBorrowing"]["returned"], false);
    assert!(data["createBorrowing"]["borrowDate"].is_string());

    let borrowings = shared.borrowings_for_book(4).await.unwrap();
    assert_eq!(borrowings.len(), 1);
    assert_eq!(borrowings[0].user_name, "Mona");
}

#[tokio::test]
async fn test_return_book() {
    let schema = graphql::build_schema(catalog());

    for _ in 0..2 {
        let query = "mutation { returnBook(borrowingId: 1) { id returned } }";
        let data = into_data(execute(&schema, query).await);
        assert_eq!(data["returnBook"], json!({ "id": 1, "returned": true }));
    }
}

#[tokio::test]
async fn test_return_unknown_borrowing() {
    let schema = graphql::build_schema(catalog());

    let response = execute(&schema, "mutation { returnBook(borrowingId: 999) { id } }").await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Borrowing not found");
}

#[tokio::test]
async fn test_add_book() {
    let shared = catalog();
    let schema = graphql::build_schema(shared.clone());

    let data = into_data(
        execute(
            &schema,
            r#"mutation { addBook(title: "The Thief and the Dogs", authorId: 3, pages: 158, year: 1961) { id title authorId pages year } }"#,
        )
        .await,
    );
    assert_eq!(
        data["addBook"],
        json!({ "id": 5, "title": "The Thief and the Dogs", "authorId": 3, "pages": 158, "year": 1961 })
    );
    assert_eq!(shared.books_by_author(3).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_sdl() {
    let sdl = graphql::sdl();

    assert!(sdl.contains("returnBook(borrowingId: Int!): Borrowing!"));
    assert!(sdl.contains("author(id: Int!): Author"));
    assert!(sdl.contains("createBorrowing(bookId: Int!, userName: String!): Borrowing!"));
}

#[tokio::test]
async fn test_graphql_over_http_shares_rest_catalog() {
    let app = api::create_router(AppState::in_memory(AppConfig::default()));

    let post = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": r#"mutation { createBorrowing(bookId: 2, userName: "Rami") { id } }"# })
                .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(post).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["createBorrowing"]["id"], 3);

    let list = axum::http::Request::builder()
        .uri("/borrowings")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(list).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let borrowings: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(borrowings[2]["userName"], "Rami");
}

#[tokio::test]
async fn test_playground() {
    let app = api::create_router(AppState::in_memory(AppConfig::default()));

    let request = axum::http::Request::builder()
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
