//! Book model and related types

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// Author ID (not checked against the author list)
    pub author_id: i32,
    pub pages: i32,
    /// Publication year
    pub year: i32,
}

/// New book fields, as taken by the `addBook` mutation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: String,
    pub author_id: i32,
    pub pages: i32,
    pub year: i32,
}
