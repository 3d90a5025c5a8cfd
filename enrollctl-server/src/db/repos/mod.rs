//! Repository traits and their PostgreSQL implementations
//!
//! Each repository follows these patterns:
//! - Uses JOINs for list operations (no N+1)
//! - Lets FK constraints reject dangling references (no check-then-insert)
//! - Runs inside the caller's unit of work, never commits on its own

pub mod students;
pub mod courses;
pub mod enrollments;

pub use students::{Student, StudentRepo};
pub use courses::{Course, CourseRepo};
pub use enrollments::{Enrollment, EnrollmentDetail, EnrollmentRepo};
