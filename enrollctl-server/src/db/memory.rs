//! In-memory store for tests and local runs without PostgreSQL
//!
//! Enforces the same foreign keys as the SQL schema. A unit of work holds
//! the store's lock for its whole lifetime and keeps a snapshot of the rows
//! it started from; rollback, or drop without commit, restores that snapshot.
//! Id sequences are not rolled back, matching PostgreSQL `SERIAL`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::repos::{
    Course, CourseRepo, Enrollment, EnrollmentDetail, EnrollmentRepo, Student, StudentRepo,
};
use super::store::{Store, UnitOfWork};
use super::DbError;
use crate::models::{CourseTitle, NewEnrollment, StudentName};

const STUDENT_FK: &str = "enrollments_student_id_fkey";
const COURSE_FK: &str = "enrollments_course_id_fkey";

#[derive(Debug, Clone, Default)]
struct Tables {
    students: BTreeMap<i32, Student>,
    courses: BTreeMap<i32, Course>,
    enrollments: BTreeMap<i32, Enrollment>,
}

#[derive(Debug, Default)]
struct Sequences {
    student: i32,
    course: i32,
    enrollment: i32,
}

fn next(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

#[derive(Debug, Default)]
struct MemoryState {
    tables: Tables,
    sequences: Sequences,
}

/// Store keeping all rows in process memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed enrollment rows.
    pub async fn enrollment_count(&self) -> usize {
        self.state.lock().await.tables.enrollments.len()
    }
}

/// Exclusive, snapshot-backed unit of work over a [`MemoryStore`]
pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    snapshot: Option<Tables>,
}

impl MemoryUnitOfWork {
    fn tables(&mut self) -> &mut Tables {
        &mut self.guard.tables
    }

    fn check_references(&self, student_id: i32, course_id: i32) -> Result<(), DbError> {
        let tables = &self.guard.tables;
        if !tables.students.contains_key(&student_id) {
            return Err(fk_violation(STUDENT_FK));
        }
        if !tables.courses.contains_key(&course_id) {
            return Err(fk_violation(COURSE_FK));
        }
        Ok(())
    }
}

fn fk_violation(constraint: &str) -> DbError {
    DbError::ForeignKeyViolation {
        constraint: constraint.to_owned(),
    }
}

impl Drop for MemoryUnitOfWork {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.guard.tables = snapshot;
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DbError> {
        let guard = self.state.clone().lock_owned().await;
        let snapshot = Some(guard.tables.clone());
        Ok(Box::new(MemoryUnitOfWork { guard, snapshot }))
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<(), DbError> {
        let mut this = self;
        this.snapshot = None;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DbError> {
        // Drop restores the snapshot.
        Ok(())
    }
}

#[async_trait]
impl StudentRepo for MemoryUnitOfWork {
    async fn list_students(&mut self) -> Result<Vec<Student>, DbError> {
        Ok(self.tables().students.values().cloned().collect())
    }

    async fn get_student(&mut self, id: i32) -> Result<Option<Student>, DbError> {
        Ok(self.tables().students.get(&id).cloned())
    }

    async fn insert_student(&mut self, name: &StudentName) -> Result<Student, DbError> {
        let id = next(&mut self.guard.sequences.student);
        let student = Student {
            id,
            name: name.as_str().to_owned(),
        };
        self.tables().students.insert(id, student.clone());
        Ok(student)
    }

    async fn update_student(&mut self, student: &Student) -> Result<(), DbError> {
        if let Some(row) = self.tables().students.get_mut(&student.id) {
            *row = student.clone();
        }
        Ok(())
    }

    async fn delete_student(&mut self, id: i32) -> Result<bool, DbError> {
        let tables = self.tables();
        if tables.enrollments.values().any(|e| e.student_id == id) {
            return Err(fk_violation(STUDENT_FK));
        }
        Ok(tables.students.remove(&id).is_some())
    }
}

#[async_trait]
impl CourseRepo for MemoryUnitOfWork {
    async fn list_courses(&mut self) -> Result<Vec<Course>, DbError> {
        Ok(self.tables().courses.values().cloned().collect())
    }

    async fn get_course(&mut self, id: i32) -> Result<Option<Course>, DbError> {
        Ok(self.tables().courses.get(&id).cloned())
    }

    async fn insert_course(&mut self, title: &CourseTitle) -> Result<Course, DbError> {
        let id = next(&mut self.guard.sequences.course);
        let course = Course {
            id,
            mata_kuliah: title.as_str().to_owned(),
        };
        self.tables().courses.insert(id, course.clone());
        Ok(course)
    }

    async fn update_course(&mut self, course: &Course) -> Result<(), DbError> {
        if let Some(row) = self.tables().courses.get_mut(&course.id) {
            *row = course.clone();
        }
        Ok(())
    }

    async fn delete_course(&mut self, id: i32) -> Result<bool, DbError> {
        let tables = self.tables();
        if tables.enrollments.values().any(|e| e.course_id == id) {
            return Err(fk_violation(COURSE_FK));
        }
        Ok(tables.courses.remove(&id).is_some())
    }
}

#[async_trait]
impl EnrollmentRepo for MemoryUnitOfWork {
    async fn list_enrollments(&mut self) -> Result<Vec<EnrollmentDetail>, DbError> {
        let tables = &self.guard.tables;
        let rows = tables
            .enrollments
            .values()
            .filter_map(|e| {
                let student = tables.students.get(&e.student_id)?;
                let course = tables.courses.get(&e.course_id)?;
                Some(EnrollmentDetail {
                    id: e.id,
                    student_name: student.name.clone(),
                    course_name: course.mata_kuliah.clone(),
                    course_id: e.course_id,
                    student_id: e.student_id,
                })
            })
            .collect();
        Ok(rows)
    }

    async fn get_enrollment(&mut self, id: i32) -> Result<Option<Enrollment>, DbError> {
        Ok(self.tables().enrollments.get(&id).copied())
    }

    async fn insert_enrollment(&mut self, new: NewEnrollment) -> Result<Enrollment, DbError> {
        // PostgreSQL draws the id before checking constraints.
        let id = next(&mut self.guard.sequences.enrollment);
        self.check_references(new.student_id, new.course_id)?;
        let enrollment = Enrollment {
            id,
            student_id: new.student_id,
            course_id: new.course_id,
        };
        self.tables().enrollments.insert(id, enrollment);
        Ok(enrollment)
    }

    async fn update_enrollment(&mut self, enrollment: &Enrollment) -> Result<(), DbError> {
        self.check_references(enrollment.student_id, enrollment.course_id)?;
        if let Some(row) = self.tables().enrollments.get_mut(&enrollment.id) {
            *row = *enrollment;
        }
        Ok(())
    }

    async fn delete_enrollment(&mut self, id: i32) -> Result<bool, DbError> {
        Ok(self.tables().enrollments.remove(&id).is_some())
    }
}
