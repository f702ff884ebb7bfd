// Document store seam. The seeder only ever talks to this trait, so the
// Firestore adapter and the in-memory store are interchangeable.

pub mod batch;
pub mod firestore;
pub mod memory;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Document, FieldValue};

pub use batch::{BatchWriter, MAX_BATCH_SIZE};
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

/// A single write inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    /// Create or fully replace a document.
    Set {
        collection: String,
        id: String,
        document: Document,
    },
    /// Append each value to the named array field unless already present.
    ArrayUnion {
        collection: String,
        id: String,
        fields: Vec<(String, Vec<FieldValue>)>,
    },
}

impl Write {
    pub fn set(collection: &str, id: &str, document: Document) -> Self {
        Write::Set {
            collection: collection.to_string(),
            id: id.to_string(),
            document,
        }
    }

    pub fn array_union(collection: &str, id: &str, fields: Vec<(String, Vec<FieldValue>)>) -> Self {
        Write::ArrayUnion {
            collection: collection.to_string(),
            id: id.to_string(),
            fields,
        }
    }
}

/// Trait every document store backend implements.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Human-readable backend name for log lines.
    fn name(&self) -> &str;

    /// Apply all writes atomically. Backends may reject batches above
    /// [`MAX_BATCH_SIZE`].
    async fn commit(&self, writes: Vec<Write>) -> Result<(), AppError>;

    /// Whether a document exists.
    async fn exists(&self, collection: &str, id: &str) -> Result<bool, AppError>;

    async fn set(&self, collection: &str, id: &str, document: Document) -> Result<(), AppError> {
        self.commit(vec![Write::set(collection, id, document)]).await
    }

    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        fields: Vec<(String, Vec<FieldValue>)>,
    ) -> Result<(), AppError> {
        self.commit(vec![Write::array_union(collection, id, fields)])
            .await
    }
}
