//! Business logic services for the application layer.

pub mod student_service;

pub use student_service::{StudentService, StudentServiceError};
