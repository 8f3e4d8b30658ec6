//! Note Manager - list and create operations for notes
//!
//! Sits between the HTTP handlers and the document store: shapes stored
//! documents into [`Note`]s and turns submitted forms into documents.

use super::models::*;
use crate::neo4j::DocumentStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Default collection holding notes
pub const DEFAULT_COLLECTION: &str = "Note";

/// Manager for note operations
pub struct NoteManager {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl NoteManager {
    /// Create a new NoteManager over the given collection
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// List every note in store order
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let docs = self.store.find_all(&self.collection).await?;
        let notes = notes_from_documents(&docs)?;
        tracing::debug!(count = notes.len(), collection = %self.collection, "Listed notes");
        Ok(notes)
    }

    /// Insert a note from a submitted form and return the store-assigned id
    pub async fn create_note(&self, form: HashMap<String, String>) -> Result<String> {
        let doc = document_from_form(form)?;
        let id = self.store.insert_one(&self.collection, &doc).await?;
        tracing::info!(%id, collection = %self.collection, "Created note");
        Ok(id)
    }
}
