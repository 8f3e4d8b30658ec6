//! Notes module
//!
//! A note is a numbered, titled, described item with an importance flag.
//! Notes are created from form submissions and listed on the index page.

pub mod manager;
pub mod models;

pub use manager::{NoteManager, DEFAULT_COLLECTION};
pub use models::*;
