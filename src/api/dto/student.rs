//! DTOs for student endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Student;

/// Untrusted body of `POST /api/students`.
///
/// Both fields are optional at this level so that a missing field is reported
/// as a 400 by the handler rather than as a deserialization rejection. Any
/// `id` sent by the client is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Student as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentItem {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Student> for StudentItem {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
        }
    }
}
