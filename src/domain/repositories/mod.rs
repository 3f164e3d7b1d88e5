//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`StudentRepository`] - Student storage and lookup by email
//!
//! # Testing
//!
//! See integration tests in `tests/repository_student.rs` for usage examples.

pub mod student_repository;

pub use student_repository::{RepositoryError, StudentRepository};

#[cfg(test)]
pub use student_repository::MockStudentRepository;
