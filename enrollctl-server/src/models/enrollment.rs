//! Enrollment request payloads
//!
//! The same body shape serves create and update. Create needs both ids;
//! update applies whichever ids are present and non-null.

use serde_json::Value;

use super::body::{coerce_id, is_falsy, BodyError, JsonBody};
use super::ValidationError;

/// Body of `POST /enrollments` and `PUT /enrollments/{id}`, ids still raw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentPayload {
    pub student_id: Option<Value>,
    pub course_id: Option<Value>,
}

/// Both foreign keys of a new enrollment, present and non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewEnrollment {
    pub student_id: i32,
    pub course_id: i32,
}

/// Partial update: `None` leaves the stored value unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentPatch {
    pub student_id: Option<i32>,
    pub course_id: Option<i32>,
}

impl EnrollmentPatch {
    pub fn is_empty(&self) -> bool {
        self.student_id.is_none() && self.course_id.is_none()
    }
}

impl EnrollmentPayload {
    pub fn from_json(value: Value) -> Result<Self, BodyError> {
        let mut body = JsonBody::from_value(value)?;
        Ok(Self {
            student_id: body.take("student_id"),
            course_id: body.take("course_id"),
        })
    }

    /// Falsy ids (zero, empty string, false) are treated as missing, same
    /// as absent or null.
    pub fn into_new(self) -> Result<NewEnrollment, BodyError> {
        match (supplied(self.student_id), supplied(self.course_id)) {
            (Some(student_id), Some(course_id)) => Ok(NewEnrollment {
                student_id: coerce_id("student_id", &student_id)?,
                course_id: coerce_id("course_id", &course_id)?,
            }),
            _ => Err(ValidationError::Required {
                fields: &["student_id", "course_id"],
            }
            .into()),
        }
    }

    pub fn into_patch(self) -> Result<EnrollmentPatch, BodyError> {
        Ok(EnrollmentPatch {
            student_id: self
                .student_id
                .map(|v| coerce_id("student_id", &v))
                .transpose()?,
            course_id: self
                .course_id
                .map(|v| coerce_id("course_id", &v))
                .transpose()?,
        })
    }
}

fn supplied(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !is_falsy(v))
}
