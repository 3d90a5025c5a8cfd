//! Route handlers organized by resource

pub mod health;
pub mod students;
pub mod courses;
pub mod enrollments;

use serde::Serialize;

/// `{"message": ...}` confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{"message": ..., "id": ...}` body returned with 201
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i32,
}
