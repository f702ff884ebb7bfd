use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Workers are generated with at least this many distinct skills.
pub const MIN_SKILLS: usize = 3;

/// Candidate values the generators draw enumerated fields from.
///
/// A JSON file can override any subset of the tables; keys it leaves out
/// keep the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub industries: Vec<String>,
    pub experience_levels: Vec<String>,
    pub availability_types: Vec<String>,
    pub benefits: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            skills: owned(&[
                "Communication",
                "Customer Service",
                "Sales",
                "Problem Solving",
                "Python",
                "JavaScript",
                "React",
                "Node.js",
                "Data Entry",
                "Project Management",
                "Cooking",
                "Cleaning",
                "Driving",
                "Cash Handling",
            ]),
            tags: owned(&[
                "Retail",
                "Hospitality",
                "Technology",
                "Food Service",
                "Customer Support",
                "Office Admin",
                "Warehouse",
                "Construction",
                "Education",
                "Healthcare",
            ]),
            industries: owned(&[
                "Technology",
                "Retail",
                "Hospitality",
                "Healthcare",
                "Finance",
                "Education",
                "Construction",
                "Food & Beverage",
            ]),
            experience_levels: owned(&["Entry-level", "Intermediate", "Senior", "Expert"]),
            availability_types: owned(&[
                "Full-time",
                "Part-time",
                "Contract",
                "Internship",
                "Temporary",
            ]),
            benefits: owned(&[
                "Health Insurance",
                "Paid Time Off (PTO)",
                "Dental Insurance",
                "Vision Insurance",
                "401(k)",
                "Flexible Schedule",
                "Remote Work Options",
                "Paid Sick Leave",
                "Employee Discount",
            ]),
        }
    }
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Every table but benefits needs a value, skills need at least
    /// [`MIN_SKILLS`] so workers get their minimum, and no table may repeat
    /// a value since samples are meant to be distinct.
    pub fn validate(&self) -> Result<(), AppError> {
        let tables = [
            ("skills", &self.skills),
            ("tags", &self.tags),
            ("industries", &self.industries),
            ("experience_levels", &self.experience_levels),
            ("availability_types", &self.availability_types),
            ("benefits", &self.benefits),
        ];
        for (name, values) in tables {
            if values.is_empty() && name != "benefits" {
                return Err(AppError::Config(format!("catalog table '{name}' is empty")));
            }
            let mut seen = HashSet::with_capacity(values.len());
            if let Some(dup) = values.iter().find(|v| !seen.insert(v.as_str())) {
                return Err(AppError::Config(format!(
                    "catalog table '{name}' repeats '{dup}'"
                )));
            }
        }
        if self.skills.len() < MIN_SKILLS {
            return Err(AppError::Config(format!(
                "catalog table 'skills' needs at least {MIN_SKILLS} values, got {}",
                self.skills.len()
            )));
        }
        Ok(())
    }
}

// Free-text pools. These only shape how the fake data reads.

pub const FIRST_NAMES: &[&str] = &[
    "Noa", "Ariel", "Maya", "Daniel", "Yael", "Omer", "Tamar", "Itai", "Shira", "Eitan", "Lior",
    "Michal", "Amit", "Rotem", "Jonathan", "Sarah", "David", "Rachel", "Adam", "Leah", "Nadav",
    "Hila", "Yosef", "Dana",
];

pub const LAST_NAMES: &[&str] = &[
    "Cohen", "Levi", "Mizrahi", "Peretz", "Biton", "Friedman", "Shapiro", "Katz", "Azoulay",
    "Goldberg", "Ohana", "Rosen", "Avraham", "Dahan", "Klein", "Weiss", "Ben-David", "Malka",
    "Segal", "Harari",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Ltd", "Group", "Inc", "& Sons", "LLC", "Holdings"];

pub const JOB_TITLES: &[&str] = &[
    "Barista",
    "Line Cook",
    "Sales Associate",
    "Warehouse Associate",
    "Delivery Driver",
    "Customer Service Representative",
    "Office Administrator",
    "Junior Web Developer",
    "Frontend Developer",
    "Backend Engineer",
    "Data Entry Clerk",
    "Project Coordinator",
    "Housekeeper",
    "Cashier",
    "Teaching Assistant",
    "Medical Receptionist",
    "Construction Laborer",
    "Shift Supervisor",
    "Store Manager",
    "Event Staff",
];

pub const STREETS: &[&str] = &[
    "Herzl", "Rothschild", "Ben Yehuda", "Dizengoff", "Allenby", "Jabotinsky", "Weizmann",
    "HaNassi", "Ibn Gabirol", "King George", "Bialik", "HaAtzmaut",
];

pub const CITIES: &[&str] = &[
    "Tel Aviv", "Jerusalem", "Haifa", "Beersheba", "Netanya", "Ashdod", "Rishon LeZion",
    "Petah Tikva", "Herzliya", "Eilat", "Nazareth", "Ra'anana",
];

pub const HEADLINES: &[&str] = &[
    "Reliable team player with a customer-first attitude",
    "Detail-oriented self-starter ready to learn",
    "Fast-paced environment specialist",
    "Hands-on problem solver with a positive attitude",
    "Motivated professional seeking growth opportunities",
    "Experienced shift worker with flexible availability",
    "Creative thinker who loves building things",
    "Dependable worker with strong communication skills",
];

pub const SENTENCES: &[&str] = &[
    "Works well both independently and as part of a team.",
    "Comfortable handling busy periods and tight deadlines.",
    "Enjoys helping customers find exactly what they need.",
    "Brings a calm and organized approach to every shift.",
    "Quick to pick up new tools and procedures.",
    "Takes pride in keeping the workplace clean and safe.",
    "Available for weekend and evening shifts when needed.",
    "Looking for a role with room to grow.",
    "Join a friendly team in a growing local business.",
    "Training is provided for all new hires.",
    "Shifts are scheduled two weeks in advance.",
    "We value punctuality, reliability and a good sense of humor.",
    "Responsibilities include opening and closing procedures.",
    "Candidates should be comfortable standing for long periods.",
    "Competitive pay with performance bonuses.",
    "Work closely with managers to meet daily targets.",
];
