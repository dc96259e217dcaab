//! Author domain methods on Repository

use super::Repository;
use crate::models::Author;

impl Repository {
    /// List all authors in insertion order
    pub async fn authors_list(&self) -> Vec<Author> {
        self.data.read().await.authors.clone()
    }

    /// Get author by ID
    pub async fn authors_get_by_id(&self, id: i32) -> Option<Author> {
        self.data
            .read()
            .await
            .authors
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}
