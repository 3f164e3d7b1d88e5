//! Repository trait for student persistence.

use crate::domain::entities::{NewStudent, Student};
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a [`StudentRepository`].
///
/// Uniqueness violations are tagged separately so callers can tell a
/// duplicate email apart from any other storage problem without inspecting
/// driver error types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An insert conflicted with the email unique constraint.
    #[error("unique constraint violation{}", constraint_suffix(.constraint))]
    UniqueViolation { constraint: Option<String> },

    /// Any other storage failure, other constraint violations included.
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

fn constraint_suffix(constraint: &Option<String>) -> String {
    constraint
        .as_deref()
        .map(|c| format!(" on {c}"))
        .unwrap_or_default()
}

/// Name of the email unique constraint on PostgreSQL.
const EMAIL_CONSTRAINT: &str = "students_email_key";

/// SQLite does not report constraint names, only `UNIQUE constraint failed: <table>.<column>`.
const SQLITE_EMAIL_COLUMN: &str = "students.email";

fn is_email_violation(db: &dyn sqlx::error::DatabaseError) -> bool {
    if !db.is_unique_violation() {
        return false;
    }

    match db.constraint() {
        Some(constraint) => constraint == EMAIL_CONSTRAINT,
        None => db.message().contains(SQLITE_EMAIL_COLUMN),
    }
}

/// Only a conflict on the email constraint is a [`RepositoryError::UniqueViolation`];
/// every other failure, primary key conflicts included, is
/// [`RepositoryError::Storage`].
impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && is_email_violation(db)
        {
            return Self::UniqueViolation {
                constraint: db.constraint().map(str::to_string),
            };
        }

        Self::Storage(e)
    }
}

/// Persistence gateway for students.
///
/// Email uniqueness is enforced by the storage engine itself; a conflicting
/// [`save`](StudentRepository::save) fails with
/// [`RepositoryError::UniqueViolation`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::SqliteStudentRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Returns every stored student in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on database errors.
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError>;

    /// Inserts a new student and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UniqueViolation`] if the email is already taken.
    /// Returns [`RepositoryError::Storage`] on any other database error.
    async fn save(&self, student: NewStudent) -> Result<Student, RepositoryError>;

    /// Finds a student by email.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RepositoryError>;

    /// Checks whether a student with the given email exists.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on database errors.
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;
}
