//! PostgreSQL implementation of the student repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::{RepositoryError, StudentRepository};

/// Idempotent table definition. The named UNIQUE constraint is the only
/// place email uniqueness is enforced.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id    BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    name  VARCHAR(100) NOT NULL,
    email VARCHAR(255) NOT NULL,
    CONSTRAINT students_email_key UNIQUE (email)
)
"#;

/// PostgreSQL repository for students.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Creates the `students` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the DDL statement fails.
    pub async fn init_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(SCHEMA).execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        let rows: Vec<(i64, String, String)> =
            sqlx::query_as("SELECT id, name, email FROM students ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, email)| Student::new(id, name, email))
            .collect())
    }

    async fn save(&self, student: NewStudent) -> Result<Student, RepositoryError> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id")
                .bind(&student.name)
                .bind(&student.email)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(student.into_student(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RepositoryError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, name, email FROM students WHERE email = $1")
                .bind(email)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(id, name, email)| Student::new(id, name, email)))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM students WHERE email = $1)")
                .bind(email)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }
}
