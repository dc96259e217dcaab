//! Library catalog server
//!
//! Authors, books and borrowings held in memory and served through two
//! parallel interfaces: a REST JSON API and a GraphQL API. Both are thin
//! adapters over the same [`services::Catalog`].

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use graphql::LibrarySchema;
use repository::Repository;
use services::{CatalogService, SharedCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: SharedCatalog,
    pub schema: LibrarySchema,
}

impl AppState {
    /// Wire both API layers to the given catalog
    pub fn new(config: AppConfig, catalog: SharedCatalog) -> Self {
        let schema = graphql::build_schema(catalog.clone());
        Self {
            config: Arc::new(config),
            catalog,
            schema,
        }
    }

    /// State backed by a fresh in-memory repository, seeded according to
    /// `config.catalog.seed`
    pub fn in_memory(config: AppConfig) -> Self {
        let repository = Repository::new(config.catalog.seed);
        let catalog: SharedCatalog = Arc::new(CatalogService::new(repository));
        Self::new(config, catalog)
    }
}
