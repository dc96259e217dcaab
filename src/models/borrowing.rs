//! Borrowing model and related types

use async_graphql::SimpleObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user holding a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Borrowing {
    pub id: i32,
    /// Book ID (not checked against the book list)
    pub book_id: i32,
    pub user_name: String,
    /// Date the book was borrowed (YYYY-MM-DD)
    #[schema(value_type = String, format = Date, example = "2024-10-15")]
    pub borrow_date: NaiveDate,
    pub returned: bool,
}

/// Create borrowing request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrowing {
    pub book_id: i32,
    pub user_name: String,
}
