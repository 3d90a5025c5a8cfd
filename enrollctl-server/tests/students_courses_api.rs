//! Student and course endpoints, plus the router-wide fallbacks

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{Fault, TestApp};

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn health_reports_unavailable_store() {
    let app = TestApp::with_fault(Fault::Begin);

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
    assert!(body["message"].as_str().unwrap().starts_with("database error:"));
}

#[tokio::test]
async fn non_object_student_body_creates_nothing() {
    let app = TestApp::new();

    let (status, body) = app.post("/students", json!(["Ana"])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");

    let (status, _) = app.post("/courses", json!("Math")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(app.get("/students").await.0, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/courses").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_id_uses_resource_message() {
    let app = TestApp::new();

    let (status, body) = app.get("/students/99999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Student not found" }));

    let (_, body) = app.get("/courses/99999999999").await;
    assert_eq!(body, json!({ "message": "Course not found" }));
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = TestApp::new();

    let (status, body) = app.get("/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found" }));
}

#[tokio::test]
async fn student_lifecycle() {
    let app = TestApp::new();

    let (status, body) = app.get("/students").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No students found" }));

    let (status, body) = app.post("/students", json!({ "name": "Ana" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "message": "Student created successfully", "id": 1 })
    );

    let (status, body) = app.put("/students/1", json!({ "name": "Ana Maria" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Student updated successfully" }));

    let (status, body) = app.get("/students/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Ana Maria" }));

    let (status, body) = app.delete("/students/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Student deleted successfully" }));

    let (status, body) = app.get("/students/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Student not found" }));
}

#[tokio::test]
async fn student_name_is_required() {
    let app = TestApp::new();

    let (status, body) = app.post("/students", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "name is required" }));

    app.student("Ana").await;
    let (status, body) = app.put("/students/1", json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "name cannot be empty" }));

    let (_, body) = app.get("/students/1").await;
    assert_eq!(body["name"], "Ana");
}

#[tokio::test]
async fn enrolled_student_cannot_be_deleted() {
    let app = TestApp::new();
    app.student("Ana").await;
    app.course("Math").await;
    app.post("/enrollments", json!({ "student_id": 1, "course_id": 1 }))
        .await;

    let (status, body) = app.delete("/students/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "message": "Student is still enrolled in one or more courses" })
    );

    let (status, _) = app.get("/students/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn course_lifecycle() {
    let app = TestApp::new();

    let (status, body) = app.get("/courses").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No courses found" }));

    app.course("Math").await;
    app.course("Physics").await;

    let (status, body) = app.get("/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "mata_kuliah": "Math" },
            { "id": 2, "mata_kuliah": "Physics" }
        ])
    );

    let (status, _) = app.put("/courses/2", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.put("/courses/9", json!({ "mata_kuliah": "Art" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Course not found" }));

    let (status, _) = app.delete("/courses/2").await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get("/courses").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn course_with_enrollments_cannot_be_deleted() {
    let app = TestApp::new();
    app.student("Ana").await;
    app.course("Math").await;
    app.post("/enrollments", json!({ "student_id": 1, "course_id": 1 }))
        .await;

    let (status, body) = app.delete("/courses/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "message": "Course still has enrolled students" }));
}

#[tokio::test]
async fn renamed_student_shows_in_enrollment_listing() {
    let app = TestApp::new();
    app.student("Ana").await;
    app.course("Math").await;
    app.post("/enrollments", json!({ "student_id": 1, "course_id": 1 }))
        .await;

    app.put("/students/1", json!({ "name": "Anastasia" })).await;

    let (_, list) = app.get("/enrollments").await;
    assert_eq!(list[0]["student_name"], "Anastasia");
}
