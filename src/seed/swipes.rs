use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::AppError;
use crate::models::FieldValue;
use crate::models::swipe::{self, COLLECTION, DISLIKED_FIELD, LIKED_FIELD, SwipeSample};
use crate::store::DocumentStore;

/// Share of all jobs a worker has "seen".
pub const SEEN_FRACTION: (f64, f64) = (0.3, 0.8);
/// Share of seen jobs the worker liked.
pub const LIKED_FRACTION: (f64, f64) = (0.2, 0.7);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub liked: usize,
    pub disliked: usize,
}

/// Pick a random subset of `job_ids` and split it into liked and disliked.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, worker_id: &str, job_ids: &[String]) -> SwipeSample {
    let total = job_ids.len();
    if total == 0 {
        return SwipeSample {
            worker_id: worker_id.to_string(),
            liked: Vec::new(),
            disliked: Vec::new(),
        };
    }

    let seen_share = rng.random_range(SEEN_FRACTION.0..=SEEN_FRACTION.1);
    let seen_count = ((total as f64 * seen_share).round() as usize).clamp(1, total);
    let mut seen: Vec<String> = job_ids.choose_multiple(rng, seen_count).cloned().collect();
    seen.shuffle(rng);

    let liked_share = rng.random_range(LIKED_FRACTION.0..=LIKED_FRACTION.1);
    let liked_count = ((seen.len() as f64 * liked_share).round() as usize).min(seen.len());
    let disliked = seen.split_off(liked_count);

    SwipeSample {
        worker_id: worker_id.to_string(),
        liked: seen,
        disliked,
    }
}

/// Merge a sample into the worker's swipe record without dropping ids
/// recorded by earlier runs.
pub async fn record(
    store: &dyn DocumentStore,
    sample: &SwipeSample,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let id = sample.worker_id.as_str();
    if !store.exists(COLLECTION, id).await? {
        store
            .set(COLLECTION, id, swipe::empty_record(id, now))
            .await?;
    }

    let mut fields = Vec::with_capacity(2);
    if !sample.liked.is_empty() {
        fields.push((LIKED_FIELD.to_string(), ids_to_values(&sample.liked)));
    }
    if !sample.disliked.is_empty() {
        fields.push((DISLIKED_FIELD.to_string(), ids_to_values(&sample.disliked)));
    }
    if fields.is_empty() {
        return Ok(());
    }
    store.array_union(COLLECTION, id, fields).await
}

fn ids_to_values(ids: &[String]) -> Vec<FieldValue> {
    ids.iter().map(|id| FieldValue::String(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::seed::{Catalog, Seeder};
    use crate::store::{MemoryStore, Write};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn job_ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("job-{i}")).collect()
    }

    fn strings(doc_field: &FieldValue) -> HashSet<String> {
        doc_field
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn liked_and_disliked_are_disjoint_subsets() {
        let mut rng = StdRng::seed_from_u64(1);
        let jobs = job_ids(20);
        let all: HashSet<&String> = jobs.iter().collect();
        for i in 0..200 {
            let s = sample(&mut rng, &format!("w-{i}"), &jobs);
            let liked: HashSet<&String> = s.liked.iter().collect();
            let disliked: HashSet<&String> = s.disliked.iter().collect();
            assert!(liked.is_disjoint(&disliked));
            assert!(liked.is_subset(&all));
            assert!(disliked.is_subset(&all));
            assert_eq!(liked.len(), s.liked.len());
            assert_eq!(disliked.len(), s.disliked.len());

            let seen = s.liked.len() + s.disliked.len();
            assert!((6..=16).contains(&seen), "seen {seen} of 20");
            let liked_max = (seen as f64 * LIKED_FRACTION.1).round() as usize;
            let liked_min = (seen as f64 * LIKED_FRACTION.0).round() as usize;
            assert!((liked_min..=liked_max).contains(&s.liked.len()));
        }
    }

    #[test]
    fn single_job_is_always_seen() {
        let mut rng = StdRng::seed_from_u64(2);
        let jobs = job_ids(1);
        for _ in 0..50 {
            let s = sample(&mut rng, "w", &jobs);
            assert_eq!(s.liked.len() + s.disliked.len(), 1);
        }
    }

    #[test]
    fn no_jobs_means_empty_sample() {
        let s = sample(&mut StdRng::seed_from_u64(3), "w", &[]);
        assert!(s.is_empty());
    }

    #[tokio::test]
    async fn rerun_never_removes_previous_ids() {
        let store = MemoryStore::new();
        let jobs = job_ids(30);
        let mut rng = StdRng::seed_from_u64(4);

        let first = sample(&mut rng, "w-1", &jobs);
        record(&store, &first, now()).await.unwrap();
        let second = sample(&mut rng, "w-1", &jobs);
        record(&store, &second, now()).await.unwrap();

        let doc = store.get(COLLECTION, "w-1").unwrap();
        let liked = strings(&doc[LIKED_FIELD]);
        let disliked = strings(&doc[DISLIKED_FIELD]);
        for id in first.liked.iter().chain(&second.liked) {
            assert!(liked.contains(id));
        }
        for id in first.disliked.iter().chain(&second.disliked) {
            assert!(disliked.contains(id));
        }
        // arrays hold each id once
        assert_eq!(liked.len(), doc[LIKED_FIELD].as_array().unwrap().len());
        assert_eq!(doc["worker_id"].as_str(), Some("w-1"));
    }

    #[tokio::test]
    async fn existing_record_is_not_overwritten() {
        let store = MemoryStore::new();
        let mut existing = swipe::empty_record("w-1", now());
        existing.insert(
            LIKED_FIELD.to_string(),
            FieldValue::string_array(["legacy-job"]),
        );
        store.set(COLLECTION, "w-1", existing).await.unwrap();

        let fresh = SwipeSample {
            worker_id: "w-1".to_string(),
            liked: vec!["job-1".to_string()],
            disliked: vec!["job-2".to_string()],
        };
        record(&store, &fresh, now()).await.unwrap();

        let doc = store.get(COLLECTION, "w-1").unwrap();
        assert_eq!(
            doc[LIKED_FIELD],
            FieldValue::string_array(["legacy-job", "job-1"])
        );
        assert_eq!(doc[DISLIKED_FIELD], FieldValue::string_array(["job-2"]));
    }

    /// Store that rejects any array union touching the listed worker.
    struct FlakyStore {
        inner: MemoryStore,
        broken_worker: String,
        rejected: AtomicUsize,
    }

    #[async_trait]
    impl DocumentStore for FlakyStore {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn commit(&self, writes: Vec<Write>) -> Result<(), AppError> {
            let touches_broken = writes.iter().any(|w| {
                matches!(w, Write::ArrayUnion { id, .. } if *id == self.broken_worker)
            });
            if touches_broken {
                self.rejected.fetch_add(1, Ordering::SeqCst);
                return Err(AppError::Store {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            self.inner.commit(writes).await
        }

        async fn exists(&self, collection: &str, id: &str) -> Result<bool, AppError> {
            self.inner.exists(collection, id).await
        }
    }

    #[tokio::test]
    async fn one_failing_worker_does_not_stop_the_rest() {
        let store = FlakyStore {
            inner: MemoryStore::new(),
            broken_worker: "w-2".to_string(),
            rejected: AtomicUsize::new(0),
        };
        let catalog = Catalog::default();
        let mut seeder = Seeder::new(&store, &catalog, StdRng::seed_from_u64(5)).with_clock(now());

        let workers: Vec<String> = (0..5).map(|i| format!("w-{i}")).collect();
        let summary = seeder.populate_swipes(&workers, &job_ids(10)).await;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.written, 4);
        assert_eq!(summary.skipped, 0);
        assert_eq!(store.rejected.load(Ordering::SeqCst), 1);
        for worker in ["w-0", "w-1", "w-3", "w-4"] {
            let doc = store.inner.get(COLLECTION, worker).unwrap();
            let total = doc[LIKED_FIELD].as_array().unwrap().len()
                + doc[DISLIKED_FIELD].as_array().unwrap().len();
            assert!(total > 0);
        }
    }

    #[tokio::test]
    async fn workers_are_skipped_without_jobs() {
        let store = MemoryStore::new();
        let catalog = Catalog::default();
        let mut seeder = Seeder::new(&store, &catalog, StdRng::seed_from_u64(6));
        let workers = vec!["w-0".to_string(), "w-1".to_string()];
        let summary = seeder.populate_swipes(&workers, &[]).await;
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.written, 0);
        assert_eq!(store.count(COLLECTION), 0);
        assert_eq!(store.commit_count(), 0);
    }
}
