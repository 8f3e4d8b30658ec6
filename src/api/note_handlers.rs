//! API handlers for notes

use super::handlers::{AppError, BoardState};
use super::views;
use axum::{
    extract::{Form, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed acknowledgement returned after a note is stored
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateNoteResponse {
    #[serde(rename = "Success")]
    pub success: bool,
}

/// Render every note as an HTML page
pub async fn list_notes(State(state): State<BoardState>) -> Result<Html<String>, AppError> {
    let notes = state.notes.list_notes().await?;
    Ok(Html(views::render_index(&notes)))
}

/// Create a note from a urlencoded form.
///
/// The inserted id is not echoed back.
pub async fn create_note(
    State(state): State<BoardState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<CreateNoteResponse>, AppError> {
    state.notes.create_note(form).await?;
    Ok(Json(CreateNoteResponse { success: true }))
}
