use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::AppError;
use crate::models::business::Business;
use crate::models::job::Job;
use crate::seed::catalog::{CITIES, Catalog, JOB_TITLES, STREETS};
use crate::seed::workers::{LAT_RANGE, LNG_RANGE};
use crate::seed::{coordinate, hundreds, image_url, new_id, paragraph, pick, pick_str, sample};

pub const SALARY_BASE_RANGE: (i64, i64) = (6000, 20000);
pub const SALARY_SPREAD_RANGE: (i64, i64) = (1000, 10000);
pub const MINIMUM_AGES: &[Option<u32>] = &[None, Some(16), Some(18), Some(21)];
pub const REMOTE_PROBABILITY: f64 = 0.15;

/// One job owned by a uniformly chosen business.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &Catalog,
    businesses: &[Business],
    now: DateTime<Utc>,
) -> Result<Job, AppError> {
    let business = businesses.choose(rng).ok_or(AppError::NoBusinesses)?;

    let salary_min = hundreds(rng, SALARY_BASE_RANGE.0, SALARY_BASE_RANGE.1);
    let salary_max = salary_min + hundreds(rng, SALARY_SPREAD_RANGE.0, SALARY_SPREAD_RANGE.1);

    let image_count = rng.random_range(0..=3);
    let mut job = Job {
        id: new_id(rng),
        business_id: business.id.clone(),
        business_name: business.name.clone(),
        logo_url: business.logo_url.clone(),

        title: pick_str(rng, JOB_TITLES),
        industry: pick(rng, &catalog.industries),
        description: paragraph(rng, 5),
        tags: sample(rng, &catalog.tags, 1, 4),
        experience_required: pick(rng, &catalog.experience_levels),
        skills_needed: sample(rng, &catalog.skills, 2, 5),
        availability: pick(rng, &catalog.availability_types),

        location_lat: Some(coordinate(rng, LAT_RANGE.0, LAT_RANGE.1)),
        location_lng: Some(coordinate(rng, LNG_RANGE.0, LNG_RANGE.1)),
        location_address: Some(address(rng)),
        is_remote: rng.random_bool(REMOTE_PROBABILITY),

        salary_min,
        salary_max,
        minimum_age: MINIMUM_AGES.choose(rng).copied().flatten(),
        benefits: sample(rng, &catalog.benefits, 0, 4),
        image_urls: (0..image_count).map(|_| image_url(rng, 800, 600)).collect(),

        is_active: true,
        applicants: Vec::new(),
        matches: Vec::new(),
        rejected: Vec::new(),

        created_at: now,
        updated_at: Some(now),
        posted_by_user_id: new_id(rng),
    };
    job.apply_remote();
    Ok(job)
}

fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} St, {}",
        rng.random_range(1..=250),
        pick_str(rng, STREETS),
        pick_str(rng, CITIES)
    )
}
