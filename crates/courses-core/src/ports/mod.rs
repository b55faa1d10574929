//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused
//! - Validation happens in services, not here

pub mod course_repository;
pub mod student_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::ValidationError;

pub use course_repository::CourseRepository;
pub use student_repository::StudentRepository;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without depending on concrete
/// implementations. Built by `courses_db::CoreFactory::build_repos`.
#[derive(Clone)]
pub struct Repos {
    /// Course repository (courses and their enrolments).
    pub courses: Arc<dyn CourseRepository>,
    /// Student repository.
    pub students: Arc<dyn StudentRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(courses: Arc<dyn CourseRepository>, students: Arc<dyn StudentRepository>) -> Self {
        Self { courses, students }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl CoreError {
    /// Returns true if this error means the entity does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
