//! Test helper factories and mock state builders
//!
//! Builds routers over an in-memory store and decodes response bodies.
#![allow(dead_code)]

use crate::api::create_router;
use crate::api::handlers::ServerState;
use crate::neo4j::mock::MockDocumentStore;
use crate::neo4j::DocumentStore;
use crate::notes::{NoteManager, DEFAULT_COLLECTION};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use std::sync::Arc;

// ============================================================================
// Mock state builders
// ============================================================================

/// Server state over the given store, default collection and static dir
pub fn mock_server_state(store: Arc<dyn DocumentStore>) -> ServerState {
    ServerState {
        notes: NoteManager::new(store.clone(), DEFAULT_COLLECTION),
        store,
        static_dir: "static".to_string(),
    }
}

/// Router over the given mock store
pub fn test_app(store: MockDocumentStore) -> Router {
    test_app_with_store(store).1
}

/// Router over the given mock store, keeping a handle to inspect the store
pub fn test_app_with_store(store: MockDocumentStore) -> (Arc<MockDocumentStore>, Router) {
    let store = Arc::new(store);
    let router = create_router(Arc::new(mock_server_state(store.clone())));
    (store, router)
}

// ============================================================================
// Requests / responses
// ============================================================================

/// Build a urlencoded `POST /` request
pub fn form_post(body: &str) -> Request<Body> {
    Request::post("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body as text
pub async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
