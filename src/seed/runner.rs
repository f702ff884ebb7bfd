use rand::Rng;

use crate::error::AppError;
use crate::seed::{Seeder, SwipeSummary};

/// Counts for one `populate` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulateCounts {
    pub workers: usize,
    pub jobs: usize,
    pub businesses: usize,
    pub swipes: bool,
}

/// What a run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub business_ids: Vec<String>,
    pub worker_ids: Vec<String>,
    pub job_ids: Vec<String>,
    pub swipes: Option<SwipeSummary>,
}

/// Businesses → workers → jobs → swipes, each stage finishing before the
/// next. Commit failures end the run; swipe failures do not.
pub async fn populate<R: Rng>(
    seeder: &mut Seeder<'_, R>,
    counts: PopulateCounts,
) -> Result<RunSummary, AppError> {
    let businesses = seeder.businesses(counts.businesses);
    let mut summary = RunSummary {
        business_ids: businesses.iter().map(|b| b.id.clone()).collect(),
        ..Default::default()
    };

    if counts.workers > 0 {
        summary.worker_ids = seeder.populate_workers(counts.workers).await?;
    }

    if counts.jobs > 0 {
        if businesses.is_empty() {
            tracing::error!("No business data provided. Cannot create jobs.");
            return Err(AppError::NoBusinesses);
        }
        summary.job_ids = seeder.populate_jobs(counts.jobs, &businesses).await?;
    }

    if counts.swipes {
        if summary.worker_ids.is_empty() || summary.job_ids.is_empty() {
            tracing::warn!(
                "Skipping swipes: need both workers and jobs (got {} workers, {} jobs)",
                summary.worker_ids.len(),
                summary.job_ids.len()
            );
        } else {
            let swipes = seeder
                .populate_swipes(&summary.worker_ids, &summary.job_ids)
                .await;
            if swipes.failed > 0 {
                tracing::warn!("Swipes failed for {} workers", swipes.failed);
            }
            summary.swipes = Some(swipes);
        }
    }

    tracing::info!(
        "Seeding complete via {}: {} workers, {} jobs across {} businesses",
        seeder.store().name(),
        summary.worker_ids.len(),
        summary.job_ids.len(),
        summary.business_ids.len()
    );
    Ok(summary)
}
