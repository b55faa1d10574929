#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Course, CourseFilter, CoursePatch, MAX_COURSE_NAME_LEN, MAX_PAGE_LIMIT, NewCourse, NewStudent,
    Page, Student,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{CoreError, CourseRepository, Repos, RepositoryError, StudentRepository};
pub use services::{AppCore, CourseService, StudentService};

// Silence unused dev-dependency warnings
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio_test as _;
