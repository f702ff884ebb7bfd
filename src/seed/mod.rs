// Synthetic data generation. Each generator is a pure function of the
// random source, the catalog and the clock; `Seeder` wires them to a store.

pub mod businesses;
pub mod catalog;
pub mod jobs;
pub mod runner;
pub mod swipes;
pub mod workers;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::AppError;
use crate::models::business::Business;
use crate::models::{job, worker};
use crate::store::{BatchWriter, DocumentStore};

pub use catalog::Catalog;
pub use swipes::SwipeSummary;

/// Generates records and writes them through a document store.
pub struct Seeder<'a, R> {
    store: &'a dyn DocumentStore,
    catalog: &'a Catalog,
    rng: R,
    now: DateTime<Utc>,
}

impl<'a, R: Rng> Seeder<'a, R> {
    pub fn new(store: &'a dyn DocumentStore, catalog: &'a Catalog, rng: R) -> Self {
        Self {
            store,
            catalog,
            rng,
            now: Utc::now(),
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store
    }

    pub fn businesses(&mut self, count: usize) -> Vec<Business> {
        (0..count)
            .map(|_| businesses::generate(&mut self.rng))
            .collect()
    }

    /// Write `count` workers and return their ids in generation order.
    pub async fn populate_workers(&mut self, count: usize) -> Result<Vec<String>, AppError> {
        tracing::info!("Populating {count} workers...");
        let mut ids = Vec::with_capacity(count);
        let mut writer = BatchWriter::new(self.store);
        for _ in 0..count {
            let record = workers::generate(&mut self.rng, self.catalog, self.now);
            let id = record.id.clone();
            writer
                .set(worker::COLLECTION, &id, record.into_document())
                .await?;
            ids.push(id);
        }
        let stats = writer.finish().await?;
        tracing::info!(
            "Successfully added {} workers in {} batches",
            stats.writes,
            stats.batches
        );
        Ok(ids)
    }

    /// Write `count` jobs spread over `businesses` and return their ids.
    /// Nothing is written when `businesses` is empty.
    pub async fn populate_jobs(
        &mut self,
        count: usize,
        businesses: &[Business],
    ) -> Result<Vec<String>, AppError> {
        if businesses.is_empty() {
            return Err(AppError::NoBusinesses);
        }

        tracing::info!("Populating {count} jobs...");
        let mut ids = Vec::with_capacity(count);
        let mut writer = BatchWriter::new(self.store);
        for _ in 0..count {
            let record = jobs::generate(&mut self.rng, self.catalog, businesses, self.now)?;
            let id = record.id.clone();
            writer
                .set(job::COLLECTION, &id, record.into_document())
                .await?;
            ids.push(id);
        }
        let stats = writer.finish().await?;
        tracing::info!(
            "Successfully added {} jobs in {} batches",
            stats.writes,
            stats.batches
        );
        Ok(ids)
    }

    /// Sample and merge swipes for every worker. Per-worker failures are
    /// logged and counted, never returned.
    pub async fn populate_swipes(
        &mut self,
        worker_ids: &[String],
        job_ids: &[String],
    ) -> SwipeSummary {
        tracing::info!(
            "Sampling swipes for {} workers over {} jobs...",
            worker_ids.len(),
            job_ids.len()
        );
        let mut summary = SwipeSummary::default();
        for worker_id in worker_ids {
            let sample = swipes::sample(&mut self.rng, worker_id, job_ids);
            if sample.is_empty() {
                summary.skipped += 1;
                continue;
            }
            match swipes::record(self.store, &sample, self.now).await {
                Ok(()) => {
                    summary.written += 1;
                    summary.liked += sample.liked.len();
                    summary.disliked += sample.disliked.len();
                }
                Err(e) => {
                    tracing::error!("Failed to record swipes for worker {worker_id}: {e}");
                    summary.failed += 1;
                }
            }
        }
        tracing::info!(
            "Swipes recorded for {} workers ({} liked, {} disliked, {} skipped, {} failed)",
            summary.written,
            summary.liked,
            summary.disliked,
            summary.skipped,
            summary.failed
        );
        summary
    }
}

#[cfg(test)]
impl<R: Rng> Seeder<'_, R> {
    /// Pin the timestamp written into created/updated fields.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Random v4 UUID drawn from `rng`.
pub(crate) fn new_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}

/// One value from a non-empty table.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[String]) -> String {
    values.choose(rng).cloned().unwrap_or_default()
}

pub(crate) fn pick_str<R: Rng + ?Sized>(rng: &mut R, values: &[&str]) -> String {
    values.choose(rng).map(|s| (*s).to_string()).unwrap_or_default()
}

/// Between `min` and `max` distinct values, capped by the table size.
pub(crate) fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    values: &[String],
    min: usize,
    max: usize,
) -> Vec<String> {
    let k = rng.random_range(min..=max).min(values.len());
    values.choose_multiple(rng, k).cloned().collect()
}

/// Uniform multiple of 100 in `[low, high]`.
pub(crate) fn hundreds<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> i64 {
    rng.random_range(low / 100..=high / 100) * 100
}

/// Uniform coordinate rounded to six decimals.
pub(crate) fn coordinate<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    (rng.random_range(low..=high) * 1e6).round() / 1e6
}

pub(crate) fn image_url<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> String {
    let token: u32 = rng.random();
    format!("https://picsum.photos/seed/{token:08x}/{width}/{height}")
}

pub(crate) fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| pick_str(rng, catalog::SENTENCES))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn ids_are_v4_and_reproducible() {
        let a = new_id(&mut StdRng::seed_from_u64(7));
        let b = new_id(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        let parsed = uuid::Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn hundreds_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let v = hundreds(&mut rng, 5000, 15000);
            assert!((5000..=15000).contains(&v));
            assert_eq!(v % 100, 0);
        }
    }

    #[test]
    fn sample_caps_at_table_size() {
        let mut rng = StdRng::seed_from_u64(2);
        let values: Vec<String> = vec!["a".into(), "b".into()];
        let picked = sample(&mut rng, &values, 3, 6);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn coordinates_have_six_decimals() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let lat = coordinate(&mut rng, 29.5, 33.3);
            assert!((29.5..=33.3).contains(&lat));
            assert!(((lat * 1e6).round() - lat * 1e6).abs() < 1e-6);
        }
    }
}
