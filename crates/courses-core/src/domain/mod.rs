//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `course` - Course types (`Course`, `NewCourse`, `CoursePatch`) and list queries
//! - `student` - Student types (`Student`, `NewStudent`)
//! - `validation` - Input rules shared by every adapter

mod course;
mod student;
pub mod validation;

// Re-export course types at the domain level for convenience
pub use course::{Course, CourseFilter, CoursePatch, MAX_PAGE_LIMIT, NewCourse, Page};

// Re-export student types at the domain level for convenience
pub use student::{NewStudent, Student};

pub use validation::{MAX_COURSE_NAME_LEN, ValidationError};
