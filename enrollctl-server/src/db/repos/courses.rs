//! Course repository

use async_trait::async_trait;
use sqlx::FromRow;

use crate::db::postgres::PgUnitOfWork;
use crate::db::DbError;
use crate::models::CourseTitle;

/// Course record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: i32,
    pub mata_kuliah: String,
}

#[async_trait]
pub trait CourseRepo: Send {
    async fn list_courses(&mut self) -> Result<Vec<Course>, DbError>;

    async fn get_course(&mut self, id: i32) -> Result<Option<Course>, DbError>;

    async fn insert_course(&mut self, title: &CourseTitle) -> Result<Course, DbError>;

    async fn update_course(&mut self, course: &Course) -> Result<(), DbError>;

    async fn delete_course(&mut self, id: i32) -> Result<bool, DbError>;
}

#[async_trait]
impl CourseRepo for PgUnitOfWork {
    async fn list_courses(&mut self) -> Result<Vec<Course>, DbError> {
        let courses: Vec<Course> = sqlx::query_as("SELECT id, mata_kuliah FROM courses ORDER BY id")
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(courses)
    }

    async fn get_course(&mut self, id: i32) -> Result<Option<Course>, DbError> {
        let course: Option<Course> = sqlx::query_as("SELECT id, mata_kuliah FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(course)
    }

    async fn insert_course(&mut self, title: &CourseTitle) -> Result<Course, DbError> {
        let course: Course = sqlx::query_as(
            "INSERT INTO courses (mata_kuliah) VALUES ($1) RETURNING id, mata_kuliah",
        )
        .bind(title.as_str())
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(course)
    }

    async fn update_course(&mut self, course: &Course) -> Result<(), DbError> {
        sqlx::query("UPDATE courses SET mata_kuliah = $2 WHERE id = $1")
            .bind(course.id)
            .bind(&course.mata_kuliah)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn delete_course(&mut self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
