//! Neo4j-backed document store for notes

pub mod client;
mod impl_document_store;
pub mod traits;

pub use client::Neo4jClient;
pub use traits::DocumentStore;

#[cfg(test)]
pub(crate) mod mock;
