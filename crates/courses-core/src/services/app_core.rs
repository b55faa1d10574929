//! `AppCore` - the primary application facade.
//!
//! Adapters (HTTP, CLI) receive an `AppCore` instance and use it to access
//! all functionality.

use crate::ports::Repos;

use super::{CourseService, StudentService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete repository
/// implementations.
///
/// # Example
///
/// ```ignore
/// let repos = courses_db::CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let courses = core.courses().list(&CourseFilter::all(), &Page::all()).await?;
/// ```
pub struct AppCore {
    courses: CourseService,
    students: StudentService,
}

impl AppCore {
    /// Create a new `AppCore` from the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            courses: CourseService::new(repos.courses, repos.students.clone()),
            students: StudentService::new(repos.students),
        }
    }

    /// Access the course service.
    pub const fn courses(&self) -> &CourseService {
        &self.courses
    }

    /// Access the student service.
    pub const fn students(&self) -> &StudentService {
        &self.students
    }
}
