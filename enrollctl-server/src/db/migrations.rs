//! Schema creation for students, courses and enrollments
//!
//! Idempotent: every statement is `CREATE TABLE IF NOT EXISTS`, so this runs
//! on each server start as well as from `enrollctl migrate`.

use sqlx::PgPool;

use super::DbError;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id SERIAL PRIMARY KEY,
            mata_kuliah TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // No ON DELETE CASCADE: removing a referenced student or course must fail.
    // No UNIQUE (student_id, course_id): duplicate enrollments are allowed.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            id SERIAL PRIMARY KEY,
            student_id INTEGER NOT NULL REFERENCES students(id),
            course_id INTEGER NOT NULL REFERENCES courses(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_enrollments_student ON enrollments(student_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_enrollments_course ON enrollments(course_id)")
        .execute(pool)
        .await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
