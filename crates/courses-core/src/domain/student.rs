//! Student domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted student.
///
/// Students only exist here to populate the `students` relation on courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

/// A student to be inserted (no ID yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl NewStudent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: None,
        }
    }
}
