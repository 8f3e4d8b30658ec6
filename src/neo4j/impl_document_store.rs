//! `DocumentStore` implementation for `Neo4jClient`.
//!
//! Every method simply delegates to the corresponding inherent method on `Neo4jClient`.

use async_trait::async_trait;

use super::client::Neo4jClient;
use super::traits::DocumentStore;
use crate::notes::{Document, StoredDocument};

#[async_trait]
impl DocumentStore for Neo4jClient {
    async fn health_check(&self) -> anyhow::Result<bool> {
        self.health_check().await
    }

    async fn find_all(&self, collection: &str) -> anyhow::Result<Vec<StoredDocument>> {
        self.find_all(collection).await
    }

    async fn insert_one(&self, collection: &str, document: &Document) -> anyhow::Result<String> {
        self.insert_one(collection, document).await
    }
}
