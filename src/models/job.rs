use chrono::{DateTime, Utc};

use crate::models::document::{Document, DocumentBuilder, FieldValue};

pub const COLLECTION: &str = "jobs";

/// Address written for remote jobs in place of a street address.
pub const REMOTE_ADDRESS: &str = "Remote";

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    pub business_id: String,
    pub business_name: String,
    pub logo_url: String,

    pub title: String,
    pub industry: String,
    pub description: String,
    pub tags: Vec<String>,
    pub experience_required: String,
    pub skills_needed: Vec<String>,
    pub availability: String,

    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_address: Option<String>,
    pub is_remote: bool,

    pub salary_min: i64,
    pub salary_max: i64,
    pub minimum_age: Option<u32>,
    pub benefits: Vec<String>,
    pub image_urls: Vec<String>,

    pub is_active: bool,
    pub applicants: Vec<String>,
    pub matches: Vec<String>,
    pub rejected: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub posted_by_user_id: String,
}

impl Job {
    /// Remote jobs carry no coordinates and a sentinel address.
    pub fn apply_remote(&mut self) {
        if self.is_remote {
            self.location_lat = None;
            self.location_lng = None;
            self.location_address = Some(REMOTE_ADDRESS.to_string());
        }
    }

    pub fn into_document(self) -> Document {
        DocumentBuilder::new()
            .field("id", self.id)
            .field("business_id", self.business_id)
            .field("business_name", self.business_name)
            .field("logo_url", self.logo_url)
            .field("title", self.title)
            .field("industry", self.industry)
            .field("description", self.description)
            .field("tags", FieldValue::string_array(self.tags))
            .field("experience_required", self.experience_required)
            .field("skills_needed", FieldValue::string_array(self.skills_needed))
            .field("availability", self.availability)
            .field("location_lat", self.location_lat)
            .field("location_lng", self.location_lng)
            .field("location_address", self.location_address)
            .field("is_remote", self.is_remote)
            .field("salary_min", self.salary_min)
            .field("salary_max", self.salary_max)
            .field("minimum_age", self.minimum_age)
            .field("benefits", FieldValue::string_array(self.benefits))
            .field("imageUrls", FieldValue::string_array(self.image_urls))
            .field("is_active", self.is_active)
            .field("applicants", FieldValue::string_array(self.applicants))
            .field("matches", FieldValue::string_array(self.matches))
            .field("rejected", FieldValue::string_array(self.rejected))
            .field("created_at", self.created_at)
            .field("updated_at", self.updated_at)
            .field("posted_by_user_id", self.posted_by_user_id)
            .build()
    }
}
