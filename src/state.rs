//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::StudentService;
use crate::domain::repositories::StudentRepository;

/// Services available to every handler.
///
/// The repository is held as a trait object so the same router serves
/// PostgreSQL, SQLite or a test double.
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<StudentService<dyn StudentRepository>>,
}

impl AppState {
    /// Builds the service graph on top of a repository.
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self {
            student_service: Arc::new(StudentService::new(repository)),
        }
    }
}
