use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Document, FieldValue};
use crate::store::{DocumentStore, MAX_BATCH_SIZE, Write};

type Collections = BTreeMap<String, BTreeMap<String, Document>>;

/// In-process document store. Backs dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
    commits: Mutex<Vec<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collections(&self) -> MutexGuard<'_, Collections> {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of writes in each commit, in order.
    pub fn commit_sizes(&self) -> Vec<usize> {
        self.commits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn commit_count(&self) -> usize {
        self.commit_sizes().len()
    }

    /// All collections as JSON, keyed by collection then document id.
    pub fn snapshot(&self) -> Result<serde_json::Value, AppError> {
        Ok(serde_json::to_value(&*self.collections())?)
    }
}

#[cfg(test)]
impl MemoryStore {
    pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
        self.collections()
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.collections().get(collection).map_or(0, |docs| docs.len())
    }

    pub fn ids(&self, collection: &str) -> Vec<String> {
        self.collections()
            .get(collection)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default()
    }
}

fn union_into(doc: &mut Document, field: &str, values: Vec<FieldValue>) -> Result<(), AppError> {
    let entry = doc
        .entry(field.to_string())
        .or_insert_with(FieldValue::empty_array);
    let FieldValue::Array(existing) = entry else {
        return Err(AppError::Store {
            status: 400,
            message: format!("field '{field}' is not an array"),
        });
    };
    for value in values {
        if !existing.contains(&value) {
            existing.push(value);
        }
    }
    Ok(())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn commit(&self, writes: Vec<Write>) -> Result<(), AppError> {
        if writes.len() > MAX_BATCH_SIZE {
            return Err(AppError::Store {
                status: 400,
                message: format!(
                    "maximum {MAX_BATCH_SIZE} writes allowed per request, got {}",
                    writes.len()
                ),
            });
        }

        // Only documents the batch touches are staged; the store is updated
        // once every write has applied cleanly.
        let mut guard = self.collections();
        let mut staged: BTreeMap<(String, String), Document> = BTreeMap::new();
        let count = writes.len();

        for write in writes {
            match write {
                Write::Set {
                    collection,
                    id,
                    document,
                } => {
                    staged.insert((collection, id), document);
                }
                Write::ArrayUnion {
                    collection,
                    id,
                    fields,
                } => {
                    let key = (collection, id);
                    if !staged.contains_key(&key) {
                        let current = guard
                            .get(&key.0)
                            .and_then(|docs| docs.get(&key.1))
                            .cloned()
                            .ok_or_else(|| {
                                AppError::NotFound(format!("{}/{}", key.0, key.1))
                            })?;
                        staged.insert(key.clone(), current);
                    }
                    if let Some(doc) = staged.get_mut(&key) {
                        for (field, values) in fields {
                            union_into(doc, &field, values)?;
                        }
                    }
                }
            }
        }

        for ((collection, id), document) in staged {
            guard.entry(collection).or_default().insert(id, document);
        }
        drop(guard);
        self.commits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(count);
        Ok(())
    }

    async fn exists(&self, collection: &str, id: &str) -> Result<bool, AppError> {
        Ok(self
            .collections()
            .get(collection)
            .is_some_and(|docs| docs.contains_key(id)))
    }
}
