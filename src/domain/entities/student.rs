//! Student entity, the only record the registry stores.

/// A persisted student.
///
/// `id` is assigned by the persistence gateway on the first successful save and
/// never changes afterwards. Instances only ever come back from a repository,
/// so `name` and `email` are already trimmed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Student {
    /// Creates a new Student instance.
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Input data for creating a new student.
///
/// Carries no identifier: ids are never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

impl NewStudent {
    /// Creates a new student draft from already trimmed values.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attaches the identifier handed out by storage.
    pub fn into_student(self, id: i64) -> Student {
        Student::new(id, self.name, self.email)
    }
}
