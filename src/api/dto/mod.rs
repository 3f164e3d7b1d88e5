//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field validation
//! lives in [`crate::domain::validation`].

pub mod health;
pub mod student;
