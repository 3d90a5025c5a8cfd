//! Student name validation

use serde_json::Value;

use super::body::{BodyError, JsonBody};
use super::ValidationError;

/// Validated student name (non-blank)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName(String);

impl StudentName {
    /// Create a new student name.
    ///
    /// # Example
    /// ```
    /// use enrollctl_server::models::StudentName;
    ///
    /// assert!(StudentName::new("Ana").is_ok());
    /// assert!(StudentName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /students` and `PUT /students/{id}`
#[derive(Debug, Default)]
pub struct StudentPayload {
    pub name: Option<String>,
}

impl StudentPayload {
    pub fn from_json(value: Value) -> Result<Self, BodyError> {
        let mut body = JsonBody::from_value(value)?;
        Ok(Self {
            name: body.take_string("name")?,
        })
    }

    /// Name for a new student; absent, null and blank all count as missing.
    pub fn into_name(self) -> Result<StudentName, ValidationError> {
        self.name
            .as_deref()
            .and_then(|n| StudentName::new(n).ok())
            .ok_or(ValidationError::Required { fields: &["name"] })
    }

    /// Name change for an existing student, `None` when not supplied.
    pub fn into_patch(self) -> Result<Option<StudentName>, ValidationError> {
        self.name.as_deref().map(StudentName::new).transpose()
    }
}
