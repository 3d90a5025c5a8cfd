//! Shared helpers for router-level tests over the in-memory store

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use enrollctl_server::db::{
    Course, CourseRepo, DbError, Enrollment, EnrollmentDetail, EnrollmentRepo, Student,
    StudentRepo,
};
use enrollctl_server::models::{CourseTitle, NewEnrollment, StudentName};
use enrollctl_server::{build_router, AppState, MemoryStore, ServerConfig, Store, UnitOfWork};

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let router = build_router(AppState::new(store.clone()), &ServerConfig::default());
        Self { router, store }
    }

    /// Router over a [`FaultyStore`] that fails at `fault`; `store` still
    /// shows what was committed.
    pub fn with_fault(fault: Fault) -> Self {
        let store = MemoryStore::new();
        let faulty = FaultyStore {
            inner: store.clone(),
            fault,
        };
        let router = build_router(AppState::new(faulty), &ServerConfig::default());
        Self { router, store }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    /// Create a student and return its id.
    pub async fn student(&self, name: &str) -> i64 {
        let (status, body) = self
            .post("/students", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    /// Create a course and return its id.
    pub async fn course(&self, title: &str) -> i64 {
        let (status, body) = self
            .post("/courses", serde_json::json!({ "mata_kuliah": title }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }
}

/// Where a [`FaultyStore`] fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Opening a unit of work fails
    Begin,
    /// The enrollment row is written, then the call reports an error
    InsertEnrollment,
}

fn pool_timeout() -> DbError {
    DbError::Sqlx(sqlx::Error::PoolTimedOut)
}

/// Store that delegates to a [`MemoryStore`] and fails at one point
pub struct FaultyStore {
    inner: MemoryStore,
    fault: Fault,
}

#[async_trait]
impl Store for FaultyStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DbError> {
        if self.fault == Fault::Begin {
            return Err(pool_timeout());
        }
        let inner = self.inner.begin().await?;
        Ok(Box::new(FaultyUnitOfWork {
            inner,
            fault: self.fault,
        }))
    }
}

pub struct FaultyUnitOfWork {
    inner: Box<dyn UnitOfWork>,
    fault: Fault,
}

#[async_trait]
impl UnitOfWork for FaultyUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<(), DbError> {
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), DbError> {
        self.inner.rollback().await
    }
}

#[async_trait]
impl StudentRepo for FaultyUnitOfWork {
    async fn list_students(&mut self) -> Result<Vec<Student>, DbError> {
        self.inner.list_students().await
    }

    async fn get_student(&mut self, id: i32) -> Result<Option<Student>, DbError> {
        self.inner.get_student(id).await
    }

    async fn insert_student(&mut self, name: &StudentName) -> Result<Student, DbError> {
        self.inner.insert_student(name).await
    }

    async fn update_student(&mut self, student: &Student) -> Result<(), DbError> {
        self.inner.update_student(student).await
    }

    async fn delete_student(&mut self, id: i32) -> Result<bool, DbError> {
        self.inner.delete_student(id).await
    }
}

#[async_trait]
impl CourseRepo for FaultyUnitOfWork {
    async fn list_courses(&mut self) -> Result<Vec<Course>, DbError> {
        self.inner.list_courses().await
    }

    async fn get_course(&mut self, id: i32) -> Result<Option<Course>, DbError> {
        self.inner.get_course(id).await
    }

    async fn insert_course(&mut self, title: &CourseTitle) -> Result<Course, DbError> {
        self.inner.insert_course(title).await
    }

    async fn update_course(&mut self, course: &Course) -> Result<(), DbError> {
        self.inner.update_course(course).await
    }

    async fn delete_course(&mut self, id: i32) -> Result<bool, DbError> {
        self.inner.delete_course(id).await
    }
}

#[async_trait]
impl EnrollmentRepo for FaultyUnitOfWork {
    async fn list_enrollments(&mut self) -> Result<Vec<EnrollmentDetail>, DbError> {
        self.inner.list_enrollments().await
    }

    async fn get_enrollment(&mut self, id: i32) -> Result<Option<Enrollment>, DbError> {
        self.inner.get_enrollment(id).await
    }

    async fn insert_enrollment(&mut self, new: NewEnrollment) -> Result<Enrollment, DbError> {
        let enrollment = self.inner.insert_enrollment(new).await?;
        if self.fault == Fault::InsertEnrollment {
            return Err(pool_timeout());
        }
        Ok(enrollment)
    }

    async fn update_enrollment(&mut self, enrollment: &Enrollment) -> Result<(), DbError> {
        self.inner.update_enrollment(enrollment).await
    }

    async fn delete_enrollment(&mut self, id: i32) -> Result<bool, DbError> {
        self.inner.delete_enrollment(id).await
    }
}
