//! Author model and related types

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub country: String,
    /// Year of birth
    pub birth_year: i32,
}
