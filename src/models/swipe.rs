use chrono::{DateTime, Utc};

use crate::models::document::{Document, DocumentBuilder, FieldValue};

pub const COLLECTION: &str = "swipes";
pub const LIKED_FIELD: &str = "liked_jobs";
pub const DISLIKED_FIELD: &str = "disliked_jobs";

/// One sampling pass for a worker. `liked` and `disliked` never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeSample {
    pub worker_id: String,
    pub liked: Vec<String>,
    pub disliked: Vec<String>,
}

impl SwipeSample {
    pub fn is_empty(&self) -> bool {
        self.liked.is_empty() && self.disliked.is_empty()
    }
}

/// Document written the first time a worker gets a swipe record.
/// Later passes only union ids into the two arrays.
pub fn empty_record(worker_id: &str, created_at: DateTime<Utc>) -> Document {
    DocumentBuilder::new()
        .field("worker_id", worker_id)
        .field(LIKED_FIELD, FieldValue::empty_array())
        .field(DISLIKED_FIELD, FieldValue::empty_array())
        .field("created_at", created_at)
        .build()
}
