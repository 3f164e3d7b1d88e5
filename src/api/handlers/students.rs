//! Handlers for student endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::student::{CreateStudentRequest, StudentItem};
use crate::domain::validation::{is_blank, validate_new_student};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every student.
///
/// # Endpoint
///
/// `GET /api/students`
///
/// # Errors
///
/// Returns 500 with an empty body if storage fails.
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentItem>>, AppError> {
    let students = state.student_service.list_all().await?;

    Ok(Json(students.into_iter().map(StudentItem::from).collect()))
}

/// Registers a new student.
///
/// # Endpoint
///
/// `POST /api/students`
///
/// # Request Body
///
/// ```json
/// { "name": "John Doe", "email": "john.doe@example.com" }
/// ```
///
/// Surrounding whitespace is stripped from both fields before they are
/// validated and stored.
///
/// # Errors
///
/// Returns 400 with an empty body if the body is absent or not JSON, if a
/// field is missing or blank, or if a field breaks a length/format rule. The
/// service is not called in any of those cases.
/// Returns 500 with an empty body for every service failure, including a
/// duplicate email.
pub async fn create_student_handler(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateStudentRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentItem>), AppError> {
    let payload = match payload {
        Ok(Json(Some(payload))) => payload,
        Ok(Json(None)) => {
            return Err(AppError::bad_request("Student payload is missing", json!({})));
        }
        Err(rejection) => {
            return Err(AppError::bad_request(
                "Student payload is not valid JSON",
                json!({ "reason": rejection.body_text() }),
            ));
        }
    };

    let (Some(name), Some(email)) = (payload.name, payload.email) else {
        return Err(AppError::bad_request(
            "Student name and email are required",
            json!({}),
        ));
    };

    if is_blank(Some(name.as_str())) || is_blank(Some(email.as_str())) {
        return Err(AppError::bad_request(
            "Student name and email must not be blank",
            json!({}),
        ));
    }

    let new_student = validate_new_student(&name, &email)?;

    let created = state.student_service.create(new_student).await?;

    Ok((StatusCode::CREATED, Json(StudentItem::from(created))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Student;
    use crate::domain::repositories::{MockStudentRepository, RepositoryError};
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use std::sync::Arc;

    fn make_server(mock_repo: MockStudentRepository) -> TestServer {
        let state = AppState::new(Arc::new(mock_repo));
        let app = Router::new()
            .route(
                "/api/students",
                get(list_students_handler).post(create_student_handler),
            )
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    fn rejecting_repo() -> MockStudentRepository {
        let mut mock_repo = MockStudentRepository::new();
        mock_repo.expect_save().times(0);
        mock_repo
    }

    #[tokio::test]
    async fn test_list_students_returns_items() {
        let mut mock_repo = MockStudentRepository::new();
        mock_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![Student::new(
                1,
                "John Doe".to_string(),
                "john.doe@example.com".to_string(),
            )])
        });
        let server = make_server(mock_repo);

        let response = server.get("/api/students").await;

        response.assert_status_ok();
        response.assert_json(&json!([
            { "id": 1, "name": "John Doe", "email": "john.doe@example.com" }
        ]));
    }

    #[tokio::test]
    async fn test_list_students_storage_failure_is_empty_500() {
        let mut mock_repo = MockStudentRepository::new();
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Err(RepositoryError::Storage(sqlx::Error::PoolTimedOut)));
        let server = make_server(mock_repo);

        let response = server.get("/api/students").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_create_student_trims_before_saving() {
        let mut mock_repo = MockStudentRepository::new();
        mock_repo
            .expect_save()
            .withf(|s| s.name == "John Doe" && s.email == "john@x.com")
            .times(1)
            .returning(|s| Ok(s.into_student(1)));
        let server = make_server(mock_repo);

        let response = server
            .post("/api/students")
            .json(&json!({ "name": "  John Doe  ", "email": "  john@x.com  " }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({ "id": 1, "name": "John Doe", "email": "john@x.com" }));
    }

    #[tokio::test]
    async fn test_create_student_missing_fields_never_calls_service() {
        let server = make_server(rejecting_repo());

        for body in [
            json!({ "email": "john@x.com" }),
            json!({ "name": "John Doe" }),
            json!({}),
            json!({ "name": null, "email": "john@x.com" }),
        ] {
            let response = server.post("/api/students").json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            assert!(response.text().is_empty());
        }
    }

    #[tokio::test]
    async fn test_create_student_blank_fields_never_call_service() {
        let server = make_server(rejecting_repo());

        for body in [
            json!({ "name": "", "email": "test@example.com" }),
            json!({ "name": "John Doe", "email": "" }),
            json!({ "name": "   ", "email": "test@example.com" }),
            json!({ "name": "John Doe", "email": " \t " }),
        ] {
            let response = server.post("/api/students").json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_create_student_rule_violations_never_call_service() {
        let server = make_server(rejecting_repo());

        for body in [
            json!({ "name": "J", "email": "test@example.com" }),
            json!({ "name": "a".repeat(101), "email": "test@example.com" }),
            json!({ "name": "John Doe", "email": "not-an-email" }),
            json!({ "name": "John Doe", "email": format!("{}@example.com", "a".repeat(250)) }),
        ] {
            let response = server.post("/api/students").json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_create_student_absent_or_malformed_body() {
        let server = make_server(rejecting_repo());

        let response = server.post("/api/students").json(&json!(null)).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.post("/api/students").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.post("/api/students").text("name=John").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/api/students")
            .json(&json!({ "name": 42, "email": "john@x.com" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_create_student_duplicate_email_is_empty_500() {
        let mut mock_repo = MockStudentRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::UniqueViolation { constraint: None }));
        let server = make_server(mock_repo);

        let response = server
            .post("/api/students")
            .json(&json!({ "name": "Jane Doe", "email": "duplicate@example.com" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.text().is_empty());
    }
}
