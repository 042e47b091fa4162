//! Durable document cache port
//!
//! One cache entry per document key, holding the last successfully
//! fetched document. Last-writer-wins; entries are invalidated by the
//! service after a status-changing PATCH succeeds.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use core_kernel::DocumentKey;

use crate::document::Document;

/// Port to the client-side durable cache
#[async_trait]
pub trait DocumentCache: Send + Sync {
    /// Returns the cached document for a key, if any
    async fn get(&self, key: &DocumentKey) -> Option<Document>;

    /// Stores a document, replacing any previous entry for its key
    async fn put(&self, document: Document);

    /// Drops the entry for a key
    async fn invalidate(&self, key: &DocumentKey);
}

/// In-memory cache adapter
#[derive(Debug, Default)]
pub struct InMemoryDocumentCache {
    entries: RwLock<HashMap<DocumentKey, Document>>,
}

impl InMemoryDocumentCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when no entries are cached
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentCache for InMemoryDocumentCache {
    async fn get(&self, key: &DocumentKey) -> Option<Document> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, document: Document) {
        self.entries
            .write()
            .await
            .insert(document.key.clone(), document);
    }

    async fn invalidate(&self, key: &DocumentKey) {
        self.entries.write().await.remove(key);
    }
}
