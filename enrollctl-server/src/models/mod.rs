//! Domain models with validation at construction
//!
//! Request bodies are read as JSON objects into optional-field payloads.
//! Presence is checked when converting a payload into the value a
//! repository accepts, so invalid input never reaches the store.

pub mod body;
pub mod validation;
pub mod student;
pub mod course;
pub mod enrollment;

pub use body::BodyError;
pub use validation::ValidationError;
pub use student::{StudentName, StudentPayload};
pub use course::{CourseTitle, CoursePayload};
pub use enrollment::{EnrollmentPatch, EnrollmentPayload, NewEnrollment};
