//! Input validation for course writes.
//!
//! Rules are applied by the services before anything reaches a repository,
//! so every adapter (HTTP, CLI, test factories) sees the same behavior.

use thiserror::Error;

use super::course::{MAX_PAGE_LIMIT, Page};

/// Longest accepted course name, in characters.
pub const MAX_COURSE_NAME_LEN: usize = 256;

/// A rejected input value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name may not be blank")]
    BlankName,

    #[error("name is longer than {MAX_COURSE_NAME_LEN} characters ({0})")]
    NameTooLong(usize),

    #[error("invalid student id {0}")]
    InvalidStudentId(i64),

    #[error("unknown student ids: {0:?}")]
    UnknownStudents(Vec<i64>),

    #[error("limit must be between 1 and {MAX_PAGE_LIMIT} (got {0})")]
    LimitOutOfRange(u32),
}

/// Trim a course name and check its length.
///
/// Returns the trimmed name.
pub fn normalize_course_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName);
    }

    let len = trimmed.chars().count();
    if len > MAX_COURSE_NAME_LEN {
        return Err(ValidationError::NameTooLong(len));
    }

    Ok(trimmed.to_string())
}

/// Sort and de-duplicate student ids, rejecting non-positive ones.
pub fn normalize_student_ids(ids: &[i64]) -> Result<Vec<i64>, ValidationError> {
    if let Some(&bad) = ids.iter().find(|&&id| id <= 0) {
        return Err(ValidationError::InvalidStudentId(bad));
    }

    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}

/// Check that a page window is within bounds.
pub fn validate_page(page: &Page) -> Result<(), ValidationError> {
    match page.limit {
        Some(limit) if limit == 0 || limit > MAX_PAGE_LIMIT => {
            Err(ValidationError::LimitOutOfRange(limit))
        }
        _ => Ok(()),
    }
}
