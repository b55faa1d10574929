#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb and data factories for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;
#[cfg(any(test, feature = "test-utils"))]
pub use fixtures::{CourseFactory, CourseOverrides, StudentFactory, StudentOverrides};

// Re-export repository implementations
pub use repositories::{SqliteCourseRepository, SqliteStudentRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

#[cfg(test)]
use tokio_test as _;
