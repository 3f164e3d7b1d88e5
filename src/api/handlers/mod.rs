//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod students;

pub use health::health_handler;
pub use students::{create_student_handler, list_students_handler};
