//! Course repository trait definition.
//!
//! This port defines the interface for course persistence operations,
//! including the course/student enrolment relation.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Course, CourseFilter, CoursePatch, NewCourse, Page};

/// Repository for course persistence operations.
///
/// # Design Rules
///
/// - Listing is ordered by ascending id, which is creation order
/// - Student ids passed in are already validated by the service layer
/// - A course and its enrolment rows are written atomically
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// List courses matching `filter`, windowed by `page`.
    async fn list(&self, filter: &CourseFilter, page: &Page)
    -> Result<Vec<Course>, RepositoryError>;

    /// Count courses matching `filter`, ignoring pagination.
    async fn count(&self, filter: &CourseFilter) -> Result<u64, RepositoryError>;

    /// Get a course by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Course, RepositoryError>;

    /// Insert a new course with its enrolments.
    ///
    /// Returns the persisted course with its assigned ID.
    async fn insert(&self, course: &NewCourse) -> Result<Course, RepositoryError>;

    /// Apply a partial update and return the resulting course.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn update(&self, id: i64, patch: &CoursePatch) -> Result<Course, RepositoryError>;

    /// Delete a course (and its enrolments) by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
