//! Enrollment repository
//!
//! Listing joins students and courses in the same query so each row comes
//! back with its display names. Inserts and updates rely on the FK
//! constraints to reject unknown student or course ids.

use async_trait::async_trait;
use sqlx::FromRow;

use crate::db::postgres::PgUnitOfWork;
use crate::db::DbError;
use crate::models::{EnrollmentPatch, NewEnrollment};

/// Enrollment record from database
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
}

impl Enrollment {
    /// Overwrite only the ids present in `patch`.
    pub fn apply(&mut self, patch: EnrollmentPatch) {
        if let Some(student_id) = patch.student_id {
            self.student_id = student_id;
        }
        if let Some(course_id) = patch.course_id {
            self.course_id = course_id;
        }
    }
}

/// Enrollment joined with its student's name and course title
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EnrollmentDetail {
    pub id: i32,
    pub student_name: String,
    pub course_name: String,
    pub course_id: i32,
    pub student_id: i32,
}

#[async_trait]
pub trait EnrollmentRepo: Send {
    /// All enrollments with student and course eagerly joined, ordered by id.
    async fn list_enrollments(&mut self) -> Result<Vec<EnrollmentDetail>, DbError>;

    async fn get_enrollment(&mut self, id: i32) -> Result<Option<Enrollment>, DbError>;

    async fn insert_enrollment(&mut self, new: NewEnrollment) -> Result<Enrollment, DbError>;

    async fn update_enrollment(&mut self, enrollment: &Enrollment) -> Result<(), DbError>;

    async fn delete_enrollment(&mut self, id: i32) -> Result<bool, DbError>;
}

#[async_trait]
impl EnrollmentRepo for PgUnitOfWork {
    async fn list_enrollments(&mut self) -> Result<Vec<EnrollmentDetail>, DbError> {
        let rows: Vec<EnrollmentDetail> = sqlx::query_as(
            r#"
            SELECT
                e.id,
                s.name AS student_name,
                c.mata_kuliah AS course_name,
                e.course_id,
                e.student_id
            FROM enrollments e
            JOIN students s ON s.id = e.student_id
            JOIN courses c ON c.id = e.course_id
            ORDER BY e.id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await?;
        Ok(rows)
    }

    async fn get_enrollment(&mut self, id: i32) -> Result<Option<Enrollment>, DbError> {
        let enrollment: Option<Enrollment> =
            sqlx::query_as("SELECT id, student_id, course_id FROM enrollments WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.tx)
                .await?;
        Ok(enrollment)
    }

    async fn insert_enrollment(&mut self, new: NewEnrollment) -> Result<Enrollment, DbError> {
        let enrollment: Enrollment = sqlx::query_as(
            r#"
            INSERT INTO enrollments (student_id, course_id)
            VALUES ($1, $2)
            RETURNING id, student_id, course_id
            "#,
        )
        .bind(new.student_id)
        .bind(new.course_id)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(enrollment)
    }

    async fn update_enrollment(&mut self, enrollment: &Enrollment) -> Result<(), DbError> {
        sqlx::query("UPDATE enrollments SET student_id = $2, course_id = $3 WHERE id = $1")
            .bind(enrollment.id)
            .bind(enrollment.student_id)
            .bind(enrollment.course_id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn delete_enrollment(&mut self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
