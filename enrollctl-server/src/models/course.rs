//! Course title (`mata_kuliah`) validation

use serde_json::Value;

use super::body::{BodyError, JsonBody};
use super::ValidationError;

/// Validated course title (non-blank)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Create a new course title.
    ///
    /// # Example
    /// ```
    /// use enrollctl_server::models::CourseTitle;
    ///
    /// assert!(CourseTitle::new("Math").is_ok());
    /// assert!(CourseTitle::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "mata_kuliah",
            });
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

impl AsRef<str> for CourseTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /courses` and `PUT /courses/{id}`
#[derive(Debug, Default)]
pub struct CoursePayload {
    pub mata_kuliah: Option<String>,
}

impl CoursePayload {
    pub fn from_json(value: Value) -> Result<Self, BodyError> {
        let mut body = JsonBody::from_value(value)?;
        Ok(Self {
            mata_kuliah: body.take_string("mata_kuliah")?,
        })
    }

    pub fn into_title(self) -> Result<CourseTitle, ValidationError> {
        self.mata_kuliah
            .as_deref()
            .and_then(|t| CourseTitle::new(t).ok())
            .ok_or(ValidationError::Required {
                fields: &["mata_kuliah"],
            })
    }

    pub fn into_patch(self) -> Result<Option<CourseTitle>, ValidationError> {
        self.mata_kuliah.as_deref().map(CourseTitle::new).transpose()
    }
}
