//! Student repository

use async_trait::async_trait;
use sqlx::FromRow;

use crate::db::postgres::PgUnitOfWork;
use crate::db::DbError;
use crate::models::StudentName;

/// Student record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
}

#[async_trait]
pub trait StudentRepo: Send {
    /// All students ordered by id.
    async fn list_students(&mut self) -> Result<Vec<Student>, DbError>;

    async fn get_student(&mut self, id: i32) -> Result<Option<Student>, DbError>;

    async fn insert_student(&mut self, name: &StudentName) -> Result<Student, DbError>;

    /// Persist every column of an already-loaded student.
    async fn update_student(&mut self, student: &Student) -> Result<(), DbError>;

    /// Returns false when no row had that id. Fails with
    /// [`DbError::ForeignKeyViolation`] while enrollments reference it.
    async fn delete_student(&mut self, id: i32) -> Result<bool, DbError>;
}

#[async_trait]
impl StudentRepo for PgUnitOfWork {
    async fn list_students(&mut self) -> Result<Vec<Student>, DbError> {
        let students: Vec<Student> = sqlx::query_as("SELECT id, name FROM students ORDER BY id")
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(students)
    }

    async fn get_student(&mut self, id: i32) -> Result<Option<Student>, DbError> {
        let student: Option<Student> = sqlx::query_as("SELECT id, name FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(student)
    }

    async fn insert_student(&mut self, name: &StudentName) -> Result<Student, DbError> {
        let student: Student = sqlx::query_as("INSERT INTO students (name) VALUES ($1) RETURNING id, name")
            .bind(name.as_str())
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(student)
    }

    async fn update_student(&mut self, student: &Student) -> Result<(), DbError> {
        sqlx::query("UPDATE students SET name = $2 WHERE id = $1")
            .bind(student.id)
            .bind(&student.name)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn delete_student(&mut self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
