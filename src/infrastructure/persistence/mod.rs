//! SQLx repository implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::StudentRepository`].
//! Unique-index violations from either driver surface as
//! [`crate::domain::repositories::RepositoryError::UniqueViolation`].
//!
//! # Repositories
//!
//! - [`PgStudentRepository`] - PostgreSQL, for deployments
//! - [`SqliteStudentRepository`] - SQLite, for local development and tests

pub mod pg_student_repository;
pub mod pool;
pub mod sqlite_student_repository;

pub use pg_student_repository::PgStudentRepository;
pub use pool::{DatabaseBackend, connect};
pub use sqlite_student_repository::SqliteStudentRepository;
