pub mod business;
pub mod document;
pub mod job;
pub mod swipe;
pub mod worker;

pub use document::{Document, DocumentBuilder, FieldValue};
