//! Student registration and listing service.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::{RepositoryError, StudentRepository};
use crate::domain::validation::is_blank;

/// Failures raised by [`StudentService`].
#[derive(Debug, Error)]
pub enum StudentServiceError {
    /// The student failed the service-level invariants.
    #[error("{0}")]
    InvalidArgument(String),

    /// Storage rejected the insert because the email is already registered.
    #[error("Student with email {email} already exists")]
    DuplicateEmail {
        email: String,
        #[source]
        source: RepositoryError,
    },

    /// Storage failed for any reason other than a duplicate email.
    #[error("Failed to create student")]
    CreationFailed(#[source] RepositoryError),

    #[error("Failed to retrieve students from database")]
    RetrievalFailed(#[source] RepositoryError),
}

/// Service for creating and listing students.
///
/// Re-checks the blank-field invariants on every call so it stays safe for
/// callers that bypass the HTTP layer, then delegates to the repository and
/// translates its tagged errors into [`StudentServiceError`].
pub struct StudentService<R: StudentRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: StudentRepository + ?Sized> StudentService<R> {
    /// Creates a new student service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every stored student.
    ///
    /// # Errors
    ///
    /// Returns [`StudentServiceError::RetrievalFailed`] on any storage error.
    pub async fn list_all(&self) -> Result<Vec<Student>, StudentServiceError> {
        self.repository.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to retrieve students");
            StudentServiceError::RetrievalFailed(e)
        })
    }

    /// Stores a new student and returns it with its assigned id.
    ///
    /// One call is exactly one insert attempt; nothing is retried. Email
    /// uniqueness is left to storage, so concurrent creates with the same
    /// email resolve there.
    ///
    /// # Errors
    ///
    /// Returns [`StudentServiceError::InvalidArgument`] if name or email is blank.
    /// Returns [`StudentServiceError::DuplicateEmail`] if the email is taken.
    /// Returns [`StudentServiceError::CreationFailed`] on other storage errors.
    pub async fn create(&self, student: NewStudent) -> Result<Student, StudentServiceError> {
        if is_blank(Some(student.name.as_str())) {
            return Err(StudentServiceError::InvalidArgument(
                "Student name cannot be null or empty".to_string(),
            ));
        }

        if is_blank(Some(student.email.as_str())) {
            return Err(StudentServiceError::InvalidArgument(
                "Student email cannot be null or empty".to_string(),
            ));
        }

        let email = student.email.clone();

        match self.repository.save(student).await {
            Ok(created) => {
                tracing::info!(id = created.id, "Student created");
                Ok(created)
            }
            Err(e @ RepositoryError::UniqueViolation { .. }) => {
                tracing::warn!(%email, "Rejected duplicate student email");
                Err(StudentServiceError::DuplicateEmail { email, source: e })
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create student");
                Err(StudentServiceError::CreationFailed(e))
            }
        }
    }
}
