//! Neo4j client used as a flat document store
//!
//! A collection maps to a node label. Each document is one node whose
//! properties are the document fields; its `elementId` is the identifier.

use crate::notes::{Document, StoredDocument};
use anyhow::{bail, Context, Result};
use neo4rs::{query, BoltType, Graph};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Client for Neo4j operations
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

/// Whether `name` can be interpolated into Cypher as a node label.
///
/// Labels cannot be bound as query parameters, so only plain identifiers
/// (`[A-Za-z][A-Za-z0-9_]*`) are accepted.
pub fn is_valid_collection(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn checked_label(collection: &str) -> Result<&str> {
    if !is_valid_collection(collection) {
        bail!("Invalid collection name: {:?}", collection);
    }
    Ok(collection)
}

/// Convert a document field into a Bolt value. Null fields are skipped.
fn field_to_bolt(key: &str, value: &Value) -> Result<Option<BoltType>> {
    let bolt = match value {
        Value::Null => return Ok(None),
        Value::Bool(b) => BoltType::from(*b),
        Value::String(s) => BoltType::from(s.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BoltType::from(i),
            None => match n.as_f64() {
                Some(f) => BoltType::from(f),
                None => bail!("Field {} is out of range: {}", key, n),
            },
        },
        Value::Array(_) | Value::Object(_) => {
            bail!("Field {} is not a scalar; documents must be flat", key)
        }
    };
    Ok(Some(bolt))
}

impl Neo4jClient {
    /// Create a new Neo4j client
    pub async fn new(uri: &str, user: &str, password: &str) -> Result<Self> {
        let graph = Graph::new(uri, user, password)
            .await
            .context("Failed to connect to Neo4j")?;

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Check connectivity with a trivial query
    pub async fn health_check(&self) -> Result<bool> {
        match self.graph.run(query("RETURN 1")).await {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!("Neo4j health check failed: {}", e);
                Ok(false)
            }
        }
    }

    /// Fetch every node of a collection. No ORDER BY: store-native order.
    pub async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let label = checked_label(collection)?;
        let cypher = format!("MATCH (n:{}) RETURN n, elementId(n) AS id", label);

        let mut result = self
            .graph
            .execute(query(&cypher))
            .await
            .with_context(|| format!("Failed to query collection {}", collection))?;
        let mut documents = Vec::new();

        while let Some(row) = result.next().await? {
            let id: String = row.get("id")?;
            let node: neo4rs::Node = row.get("n")?;

            let mut fields = Document::new();
            for key in node.keys() {
                let value: Value = node.get(key)?;
                fields.insert(key.to_string(), value);
            }
            documents.push(StoredDocument::new(id, fields));
        }

        Ok(documents)
    }

    /// Create one node from a flat document and return its `elementId`
    pub async fn insert_one(&self, collection: &str, document: &Document) -> Result<String> {
        let label = checked_label(collection)?;

        let mut props: HashMap<String, BoltType> = HashMap::new();
        for (key, value) in document {
            if let Some(bolt) = field_to_bolt(key, value)? {
                props.insert(key.clone(), bolt);
            }
        }

        let cypher = format!("CREATE (n:{}) SET n = $props RETURN elementId(n) AS id", label);
        let q = query(&cypher).param("props", props);

        let mut result = self
            .graph
            .execute(q)
            .await
            .with_context(|| format!("Failed to insert into collection {}", collection))?;
        let row = result
            .next()
            .await?
            .context("CREATE returned no row")?;

        Ok(row.get("id")?)
    }
}
