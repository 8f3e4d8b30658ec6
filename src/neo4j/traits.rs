//! DocumentStore trait definition
//!
//! Defines the abstract interface over the document store, enabling
//! testing with mock implementations and future backend swaps.

use crate::notes::{Document, StoredDocument};
use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for collection-addressed document storage.
///
/// Documents are flat maps of scalar values. The store owns identifier
/// assignment: callers never supply an id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Check connectivity to the backend
    async fn health_check(&self) -> Result<bool>;

    /// Fetch every document in a collection, in store-native order
    async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>>;

    /// Insert a document and return the identifier the store assigned
    async fn insert_one(&self, collection: &str, document: &Document) -> Result<String>;
}
