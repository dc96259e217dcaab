//! GraphQL API
//!
//! Queries, mutations and the relationship field resolvers all go through the
//! [`Catalog`](crate::services::Catalog) stored in the schema data.

mod mutation;
mod query;
mod types;

use async_graphql::{http::GraphiQLSource, Context, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};

use crate::{services::SharedCatalog, AppState};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Path the GraphQL endpoint is mounted on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Build the schema around a catalog
pub fn build_schema(catalog: SharedCatalog) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

/// Schema definition in SDL form
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn catalog<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedCatalog> {
    ctx.data::<SharedCatalog>()
}

/// Execute a GraphQL request
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL playground
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
