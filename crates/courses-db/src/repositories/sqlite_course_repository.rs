//! `SQLite` implementation of the `CourseRepository` trait.

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

use courses_core::{
    Course, CourseFilter, CoursePatch, CourseRepository, NewCourse, Page, RepositoryError,
};

use super::row_mappers::{COURSE_SELECT, row_to_course, storage_error};

/// WHERE clause shared by `list` and `count`. Each placeholder pair is bound
/// twice so an unset filter matches everything.
const FILTER_CLAUSE: &str = "WHERE (? IS NULL OR c.id = ?) AND (? IS NULL OR c.name = ?)";

/// `SQLite` implementation of the `CourseRepository` trait.
///
/// Courses and their `course_students` rows are always written in one
/// transaction.
pub struct SqliteCourseRepository {
    pool: SqlitePool,
}

impl SqliteCourseRepository {
    /// Create a new `SQLite` course repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> Result<Option<Course>, RepositoryError> {
        let query = format!("{COURSE_SELECT} WHERE c.id = ? GROUP BY c.id");

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .as_ref()
            .map(row_to_course)
            .transpose()
    }
}

/// Replace the enrolment of `course_id` with `students`.
async fn write_enrolment(
    tx: &mut Transaction<'_, Sqlite>,
    course_id: i64,
    students: &[i64],
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM course_students WHERE course_id = ?")
        .bind(course_id)
        .execute(&mut **tx)
        .await
        .map_err(storage_error)?;

    for student_id in students {
        sqlx::query("INSERT INTO course_students (course_id, student_id) VALUES (?, ?)")
            .bind(course_id)
            .bind(student_id)
            .execute(&mut **tx)
            .await
            .map_err(storage_error)?;
    }

    Ok(())
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound(format!("Course with ID {id}"))
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn list(
        &self,
        filter: &CourseFilter,
        page: &Page,
    ) -> Result<Vec<Course>, RepositoryError> {
        let query = format!(
            "{COURSE_SELECT} {FILTER_CLAUSE} GROUP BY c.id ORDER BY c.id LIMIT ? OFFSET ?"
        );

        // SQLite treats a negative LIMIT as unbounded
        let limit = page.limit.map_or(-1, i64::from);

        let rows = sqlx::query(&query)
            .bind(filter.id)
            .bind(filter.id)
            .bind(filter.name.as_deref())
            .bind(filter.name.as_deref())
            .bind(limit)
            .bind(i64::from(page.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_course).collect()
    }

    async fn count(&self, filter: &CourseFilter) -> Result<u64, RepositoryError> {
        let query = format!("SELECT COUNT(*) FROM courses c {FILTER_CLAUSE}");

        let count: i64 = sqlx::query_scalar(&query)
            .bind(filter.id)
            .bind(filter.id)
            .bind(filter.name.as_deref())
            .bind(filter.name.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        u64::try_from(count).map_err(|e| RepositoryError::Storage(e.to_string()))
    }

    async fn get_by_id(&self, id: i64) -> Result<Course, RepositoryError> {
        self.fetch(id).await?.ok_or_else(|| not_found(id))
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let id = sqlx::query("INSERT INTO courses (name) VALUES (?)")
            .bind(&course.name)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?
            .last_insert_rowid();

        write_enrolment(&mut tx, id, &course.students).await?;
        tx.commit().await.map_err(storage_error)?;

        self.get_by_id(id).await
    }

    async fn update(&self, id: i64, patch: &CoursePatch) -> Result<Course, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let exists = match &patch.name {
            Some(name) => {
                sqlx::query("UPDATE courses SET name = ? WHERE id = ?")
                    .bind(name)
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .map_err(storage_error)?
                    .rows_affected()
                    > 0
            }
            None => sqlx::query_scalar::<_, i64>("SELECT id FROM courses WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(storage_error)?
                .is_some(),
        };

        if !exists {
            // Dropping the transaction rolls it back
            return Err(not_found(id));
        }

        if let Some(students) = &patch.students {
            write_enrolment(&mut tx, id, students).await?;
        }

        tx.commit().await.map_err(storage_error)?;
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
