//! Course domain types.
//!
//! A course has a name and a many-to-many relation to students. The
//! relation is carried as a list of student ids, which is also how it is
//! serialized on the wire.

use serde::{Deserialize, Serialize};

/// Upper bound accepted for a page `limit`.
pub const MAX_PAGE_LIMIT: u32 = 1000;

// ─────────────────────────────────────────────────────────────────────────────
// Course Types
// ─────────────────────────────────────────────────────────────────────────────

/// A course that exists in the system with a database ID.
///
/// Use `NewCourse` for courses that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Database ID, assigned on insert.
    pub id: i64,
    /// Display name of the course.
    pub name: String,
    /// IDs of enrolled students, ascending.
    #[serde(default)]
    pub students: Vec<i64>,
}

/// A course to be inserted into the system (no ID yet).
///
/// After insertion, the repository returns a `Course` with the assigned ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    #[serde(default)]
    pub students: Vec<i64>,
}

impl NewCourse {
    /// Create a course with no enrolled students.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
        }
    }

    /// Set the enrolled students.
    #[must_use]
    pub fn with_students(mut self, students: Vec<i64>) -> Self {
        self.students = students;
        self
    }
}

/// Partial update for an existing course.
///
/// `None` fields are left untouched. `Some(vec![])` for `students` clears
/// the enrolment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

impl CoursePatch {
    /// A patch that only renames the course.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            students: None,
        }
    }

    /// Returns true if applying this patch changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.students.is_none()
    }
}

impl From<NewCourse> for CoursePatch {
    fn from(course: NewCourse) -> Self {
        Self {
            name: Some(course.name),
            students: Some(course.students),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Query Types
// ─────────────────────────────────────────────────────────────────────────────

/// Exact-match filters for listing courses. Set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CourseFilter {
    /// Filter matching every course.
    pub const fn all() -> Self {
        Self {
            id: None,
            name: None,
        }
    }

    /// Filter on a single course id.
    pub const fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    /// Filter on an exact course name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

/// Limit/offset window over an ordered listing.
///
/// `limit: None` returns every row from `offset` on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: u32,
}

impl Page {
    /// The unbounded page.
    pub const fn all() -> Self {
        Self {
            limit: None,
            offset: 0,
        }
    }

    pub const fn new(limit: Option<u32>, offset: u32) -> Self {
        Self { limit, offset }
    }
}
