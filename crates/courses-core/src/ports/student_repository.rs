//! Student repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewStudent, Student};

/// Repository for student persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// List all students, ascending by id.
    async fn list(&self) -> Result<Vec<Student>, RepositoryError>;

    /// Get a student by its database ID.
    async fn get_by_id(&self, id: i64) -> Result<Student, RepositoryError>;

    /// Insert a new student and return it with its assigned ID.
    async fn insert(&self, student: &NewStudent) -> Result<Student, RepositoryError>;

    /// Return the subset of `ids` that exist, ascending.
    async fn existing_ids(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError>;

    /// Delete a student by ID. Enrolments referencing it are removed too.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
