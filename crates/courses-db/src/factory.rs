//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use courses_core::{AppCore, Repos};

use crate::repositories::{SqliteCourseRepository, SqliteStudentRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteCourseRepository::new(pool.clone())),
            Arc::new(SqliteStudentRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use courses_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(pool);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }
}

/// Test database helper for integration tests.
///
/// Each instance owns a private in-memory `SQLite` database with the
/// production schema. Nothing is shared between instances, and the data
/// disappears when the last clone of the pool is dropped.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build trait-object repositories over this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// Build an `AppCore` over this database.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone())
    }

    /// Create a course repository using this test database.
    pub fn course_repository(&self) -> SqliteCourseRepository {
        SqliteCourseRepository::new(self.pool.clone())
    }

    /// Create a student repository using this test database.
    pub fn student_repository(&self) -> SqliteStudentRepository {
        SqliteStudentRepository::new(self.pool.clone())
    }

    /// Student data factory backed by this database.
    pub fn students(&self) -> crate::fixtures::StudentFactory {
        crate::fixtures::StudentFactory::new(self.pool.clone())
    }

    /// Course data factory backed by this database.
    pub fn courses(&self) -> crate::fixtures::CourseFactory {
        crate::fixtures::CourseFactory::new(self.pool.clone())
    }

    /// Number of persisted courses.
    pub async fn course_count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
