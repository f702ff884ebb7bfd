use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::worker::Worker;
use crate::seed::catalog::{Catalog, FIRST_NAMES, HEADLINES, LAST_NAMES, MIN_SKILLS};
use crate::seed::{coordinate, hundreds, image_url, new_id, paragraph, pick, pick_str, sample};

// Rough bounding box of Israel.
pub const LAT_RANGE: (f64, f64) = (29.5, 33.3);
pub const LNG_RANGE: (f64, f64) = (34.2, 35.9);

pub const SEARCH_RADII: &[u32] = &[10, 25, 50, 100];
pub const SALARY_MIN_RANGE: (i64, i64) = (5000, 15000);
pub const SALARY_MAX_RANGE: (i64, i64) = (15000, 40000);
pub const AGE_RANGE: (i64, i64) = (18, 60);

pub fn generate<R: Rng + ?Sized>(rng: &mut R, catalog: &Catalog, now: DateTime<Utc>) -> Worker {
    let id = new_id(rng);
    let first_name = pick_str(rng, FIRST_NAMES);
    let last_name = pick_str(rng, LAST_NAMES);
    let username = username(&first_name, &last_name, &id);

    Worker {
        email: format!("{username}@example.com"),
        phone: Some(phone_number(rng)),
        birth_date: birth_date(rng, now),
        profile_picture_url: Some(image_url(rng, 400, 400)),

        headline: Some(pick_str(rng, HEADLINES)),
        summary: Some(paragraph(rng, 3)),
        experience_level: pick(rng, &catalog.experience_levels),
        skills: sample(rng, &catalog.skills, MIN_SKILLS, 6),
        preferred_tags: sample(rng, &catalog.tags, 1, 3),
        industry_preference: Some(pick(rng, &catalog.industries)),
        resume_url: None,
        portfolio_url: None,

        location_lat: Some(coordinate(rng, LAT_RANGE.0, LAT_RANGE.1)),
        location_lng: Some(coordinate(rng, LNG_RANGE.0, LNG_RANGE.1)),
        job_search_radius: SEARCH_RADII.choose(rng).copied().unwrap_or(25),
        salary_min: hundreds(rng, SALARY_MIN_RANGE.0, SALARY_MIN_RANGE.1),
        salary_max: hundreds(rng, SALARY_MAX_RANGE.0, SALARY_MAX_RANGE.1),
        availability: pick(rng, &catalog.availability_types),
        willing_to_relocate: rng.random_bool(0.25),

        liked_jobs: Vec::new(),
        matched_jobs: Vec::new(),
        disliked_jobs: Vec::new(),

        profile_complete: rng.random_bool(0.75),
        created_at: now,
        last_updated_at: None,

        id,
        first_name,
        last_name,
        username,
    }
}

/// Lowercase handle made unique by a slice of the worker id.
fn username(first: &str, last: &str, id: &str) -> String {
    let handle: String = format!("{first}.{last}")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();
    format!("{}.{}", handle.to_lowercase(), &id[..8])
}

fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+972-5{}-{:03}-{:04}",
        rng.random_range(0..10),
        rng.random_range(0..1000),
        rng.random_range(0..10000)
    )
}

/// Midnight UTC on a day 18 to 60 years before `now`.
fn birth_date<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let days = rng.random_range(AGE_RANGE.0 * 365 + 5..=AGE_RANGE.1 * 365);
    (now.date_naive() - Duration::days(days))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn enumerated_fields_come_from_catalog() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let w = generate(&mut rng, &catalog, now());
            assert!(catalog.experience_levels.contains(&w.experience_level));
            assert!(catalog.availability_types.contains(&w.availability));
            assert!(catalog.industries.contains(w.industry_preference.as_ref().unwrap()));
            assert!(SEARCH_RADII.contains(&w.job_search_radius));

            assert!((3..=6).contains(&w.skills.len()));
            assert!(w.skills.iter().all(|s| catalog.skills.contains(s)));
            assert_eq!(w.skills.iter().collect::<HashSet<_>>().len(), w.skills.len());

            assert!((1..=3).contains(&w.preferred_tags.len()));
            assert!(w.preferred_tags.iter().all(|t| catalog.tags.contains(t)));
        }
    }

    #[test]
    fn salaries_and_location_stay_in_bounds() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let w = generate(&mut rng, &catalog, now());
            assert!((SALARY_MIN_RANGE.0..=SALARY_MIN_RANGE.1).contains(&w.salary_min));
            assert!((SALARY_MAX_RANGE.0..=SALARY_MAX_RANGE.1).contains(&w.salary_max));
            assert_eq!(w.salary_min % 100, 0);
            assert_eq!(w.salary_max % 100, 0);

            let lat = w.location_lat.unwrap();
            let lng = w.location_lng.unwrap();
            assert!((LAT_RANGE.0..=LAT_RANGE.1).contains(&lat));
            assert!((LNG_RANGE.0..=LNG_RANGE.1).contains(&lng));
        }
    }

    #[test]
    fn new_workers_start_with_empty_matching_state() {
        let w = generate(&mut StdRng::seed_from_u64(3), &Catalog::default(), now());
        assert!(w.liked_jobs.is_empty());
        assert!(w.matched_jobs.is_empty());
        assert!(w.disliked_jobs.is_empty());
        assert_eq!(w.created_at, now());
        assert!(w.last_updated_at.is_none());

        let doc = w.into_document();
        assert_eq!(doc["liked_jobs"].as_array().map(<[_]>::len), Some(0));
        assert!(doc["resumeUrl"].is_null());
        assert!(doc["last_updated_at"].is_null());
    }

    #[test]
    fn birth_dates_cover_adult_ages() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..300 {
            let born = birth_date(&mut rng, now());
            let age_days = (now() - born).num_days();
            assert!(age_days >= 18 * 365, "too young: {age_days} days");
            assert!(age_days <= 60 * 365 + 1, "too old: {age_days} days");
            assert_eq!(born.time(), NaiveTime::MIN);
        }
    }

    #[test]
    fn identity_fields_are_unique() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(9);
        let workers: Vec<Worker> = (0..200).map(|_| generate(&mut rng, &catalog, now())).collect();
        let ids: HashSet<&str> = workers.iter().map(|w| w.id.as_str()).collect();
        let emails: HashSet<&str> = workers.iter().map(|w| w.email.as_str()).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(emails.len(), 200);
    }
}
