use crate::error::AppError;
use crate::models::Document;
use crate::store::{DocumentStore, Write};

/// Firestore rejects batches with more writes than this.
pub const MAX_BATCH_SIZE: usize = 500;

/// Accumulates writes and commits them in chunks of at most `limit`.
///
/// Call [`BatchWriter::finish`] to flush the remainder; a writer dropped
/// with pending writes loses them.
pub struct BatchWriter<'a> {
    store: &'a dyn DocumentStore,
    pending: Vec<Write>,
    limit: usize,
    committed: usize,
    batches: usize,
}

/// Totals reported by [`BatchWriter::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    pub writes: usize,
    pub batches: usize,
}

impl<'a> BatchWriter<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self::with_limit(store, MAX_BATCH_SIZE)
    }

    pub fn with_limit(store: &'a dyn DocumentStore, limit: usize) -> Self {
        let limit = limit.clamp(1, MAX_BATCH_SIZE);
        Self {
            store,
            pending: Vec::with_capacity(limit),
            limit,
            committed: 0,
            batches: 0,
        }
    }

    /// Queue a document write, committing as soon as the batch is full.
    pub async fn set(
        &mut self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), AppError> {
        self.pending.push(Write::set(collection, id, document));
        if self.pending.len() >= self.limit {
            self.flush().await?;
        }
        Ok(())
    }

    /// Commit whatever is pending. No-op when nothing is queued.
    pub async fn flush(&mut self) -> Result<(), AppError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let writes = std::mem::replace(&mut self.pending, Vec::with_capacity(self.limit));
        let count = writes.len();
        self.store.commit(writes).await?;
        self.committed += count;
        self.batches += 1;
        tracing::info!(
            "Committed batch {} ({count} writes, {} total) to {}",
            self.batches,
            self.committed,
            self.store.name()
        );
        Ok(())
    }

    pub async fn finish(mut self) -> Result<BatchStats, AppError> {
        self.flush().await?;
        Ok(BatchStats {
            writes: self.committed,
            batches: self.batches,
        })
    }
}

#[cfg(test)]
impl BatchWriter<'_> {
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for BatchWriter<'_> {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::warn!(
                "Batch writer dropped with {} uncommitted writes",
                self.pending.len()
            );
        }
    }
}
