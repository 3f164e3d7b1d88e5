//! SQLite implementation of the student repository.
//!
//! Used for local development (`sqlite::memory:` or a file) and for the HTTP
//! integration tests, which need a real storage engine with a unique index
//! but no external server.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::{RepositoryError, StudentRepository};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)
"#;

/// SQLite repository for students.
pub struct SqliteStudentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
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
impl StudentRepository for SqliteStudentRepository {
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
            sqlx::query_as("INSERT INTO students (name, email) VALUES (?, ?) RETURNING id")
                .bind(&student.name)
                .bind(&student.email)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(student.into_student(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RepositoryError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, name, email FROM students WHERE email = ?")
                .bind(email)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(id, name, email)| Student::new(id, name, email)))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }
}
