#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use studentify::infrastructure::persistence::SqliteStudentRepository;
use studentify::routes::api_router;
use studentify::state::AppState;

/// Fresh in-memory SQLite repository with the schema in place.
///
/// A single, never-recycled connection keeps the database alive for the
/// whole test.
pub async fn create_test_repository() -> Arc<SqliteStudentRepository> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let repository = SqliteStudentRepository::new(Arc::new(pool));
    repository.init_schema().await.unwrap();
    Arc::new(repository)
}

pub fn create_test_state(repository: Arc<SqliteStudentRepository>) -> AppState {
    AppState::new(repository)
}

pub async fn make_server() -> TestServer {
    let state = create_test_state(create_test_repository().await);
    TestServer::new(api_router(state)).unwrap()
}
