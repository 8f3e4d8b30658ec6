//! In-memory mock implementation of DocumentStore for testing.
//!
//! Collections are insertion-ordered `Vec`s behind a `tokio::sync::RwLock`.
//! Conditionally compiled with `#[cfg(test)]`.

use crate::neo4j::traits::DocumentStore;
use crate::notes::{Document, StoredDocument};
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory mock implementation of DocumentStore for testing.
pub struct MockDocumentStore {
    pub collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
    /// When set, every operation fails as if the backend were unreachable
    pub offline: AtomicBool,
}

impl MockDocumentStore {
    /// Create a new empty MockDocumentStore.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            offline: AtomicBool::new(false),
        }
    }

    /// Create a store whose every call fails
    pub fn offline() -> Self {
        let store = Self::new();
        store.offline.store(true, Ordering::SeqCst);
        store
    }

    /// Seed a raw document with an explicit id, bypassing form coercion
    pub async fn seed(&self, collection: &str, id: &str, fields: Document) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument::new(id, fields));
    }

    /// Raw documents currently held for a collection
    pub async fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            bail!("Mock store is offline");
        }
        Ok(())
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn health_check(&self) -> Result<bool> {
        Ok(!self.offline.load(Ordering::SeqCst))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        self.check_online()?;
        Ok(self.documents(collection).await)
    }

    async fn insert_one(&self, collection: &str, document: &Document) -> Result<String> {
        self.check_online()?;
        let id = Uuid::new_v4().to_string();
        let fields = document
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument::new(id.clone(), fields));
        Ok(id)
    }
}
