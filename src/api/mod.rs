//! HTTP surface for the notes board

pub mod handlers;
pub mod note_handlers;
pub mod routes;
pub mod views;

pub use routes::create_router;
