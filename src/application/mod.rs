//! Application layer services implementing business logic.
//!
//! Services consume repository traits, enforce business rules and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::student_service::StudentService`] - Student creation and listing
pub mod services;
