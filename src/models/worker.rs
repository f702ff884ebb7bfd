use chrono::{DateTime, Utc};

use crate::models::document::{Document, DocumentBuilder, FieldValue};

pub const COLLECTION: &str = "workers";

#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone: Option<String>,
    pub birth_date: DateTime<Utc>,
    pub profile_picture_url: Option<String>,

    pub headline: Option<String>,
    pub summary: Option<String>,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub preferred_tags: Vec<String>,
    pub industry_preference: Option<String>,
    pub resume_url: Option<String>,
    pub portfolio_url: Option<String>,

    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub job_search_radius: u32,
    pub salary_min: i64,
    pub salary_max: i64,
    pub availability: String,
    pub willing_to_relocate: bool,

    pub liked_jobs: Vec<String>,
    pub matched_jobs: Vec<String>,
    pub disliked_jobs: Vec<String>,

    pub profile_complete: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl Worker {
    /// Field map using the names the mobile client reads.
    pub fn into_document(self) -> Document {
        DocumentBuilder::new()
            .field("id", self.id)
            .field("email", self.email)
            .field("firstName", self.first_name)
            .field("lastName", self.last_name)
            .field("username", self.username)
            .field("phone", self.phone)
            .field("birth_date", self.birth_date)
            .field("profilePictureUrl", self.profile_picture_url)
            .field("headline", self.headline)
            .field("summary", self.summary)
            .field("experience_level", self.experience_level)
            .field("skills", FieldValue::string_array(self.skills))
            .field("preferred_tags", FieldValue::string_array(self.preferred_tags))
            .field("industry_preference", self.industry_preference)
            .field("resumeUrl", self.resume_url)
            .field("portfolioUrl", self.portfolio_url)
            .field("location_lat", self.location_lat)
            .field("location_lng", self.location_lng)
            .field("job_search_radius", self.job_search_radius)
            .field("salary_min", self.salary_min)
            .field("salary_max", self.salary_max)
            .field("availability", self.availability)
            .field("willing_to_relocate", self.willing_to_relocate)
            .field("liked_jobs", FieldValue::string_array(self.liked_jobs))
            .field("matched_jobs", FieldValue::string_array(self.matched_jobs))
            .field("disliked_jobs", FieldValue::string_array(self.disliked_jobs))
            .field("profileComplete", self.profile_complete)
            .field("created_at", self.created_at)
            .field("last_updated_at", self.last_updated_at)
            .build()
    }
}
