//! Test-data factories.
//!
//! Each factory inserts rows straight through the repositories, skipping
//! service validation, and fills every field the caller leaves unset with a
//! generated value. Generated names carry a random suffix, so they are
//! unique within a database.

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

use courses_core::{Course, CourseRepository, NewCourse, NewStudent, Student, StudentRepository};

use crate::repositories::{SqliteCourseRepository, SqliteStudentRepository};

fn generated_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Field overrides for [`StudentFactory::make`].
#[derive(Debug, Clone, Default)]
pub struct StudentOverrides {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Field overrides for [`CourseFactory::make`].
#[derive(Debug, Clone, Default)]
pub struct CourseOverrides {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

impl CourseOverrides {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            students: None,
        }
    }
}

/// Inserts students with generated names.
pub struct StudentFactory {
    repo: SqliteStudentRepository,
}

impl StudentFactory {
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqliteStudentRepository::new(pool),
        }
    }

    /// Insert one student.
    pub async fn make(&self, overrides: StudentOverrides) -> Result<Student> {
        let student = NewStudent {
            name: overrides.name.unwrap_or_else(|| generated_name("student")),
            birth_date: overrides.birth_date,
        };
        Ok(self.repo.insert(&student).await?)
    }

    /// Insert `quantity` students, returned in insertion order.
    pub async fn make_many(&self, quantity: usize) -> Result<Vec<Student>> {
        let mut students = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            students.push(self.make(StudentOverrides::default()).await?);
        }
        Ok(students)
    }
}

/// Inserts courses with generated names.
pub struct CourseFactory {
    repo: SqliteCourseRepository,
}

impl CourseFactory {
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqliteCourseRepository::new(pool),
        }
    }

    /// Insert one course.
    pub async fn make(&self, overrides: CourseOverrides) -> Result<Course> {
        let course = NewCourse {
            name: overrides.name.unwrap_or_else(|| generated_name("course")),
            students: overrides.students.unwrap_or_default(),
        };
        Ok(self.repo.insert(&course).await?)
    }

    /// Insert `quantity` courses, each enrolling every student in `students`.
    ///
    /// Courses are returned in insertion order, which is also the order the
    /// API lists them in.
    pub async fn make_many(&self, quantity: usize, students: &[Student]) -> Result<Vec<Course>> {
        let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();

        let mut courses = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            courses.push(
                self.make(CourseOverrides {
                    name: None,
                    students: Some(student_ids.clone()),
                })
                .await?,
            );
        }
        Ok(courses)
    }
}
