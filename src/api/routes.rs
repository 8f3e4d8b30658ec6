//! Route definitions

use super::handlers::{self, BoardState};
use super::note_handlers;
use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the application router
pub fn create_router(state: BoardState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Notes: list page and form submission share the index path
        .route(
            "/",
            get(note_handlers::list_notes).post(note_handlers::create_note),
        )
        .nest_service("/static", static_files)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
