//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain rules.
//! They don't know about concrete implementations.

mod app_core;
mod course_service;
mod student_service;

pub use app_core::AppCore;
pub use course_service::CourseService;
pub use student_service::StudentService;
