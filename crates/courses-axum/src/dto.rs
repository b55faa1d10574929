//! Request DTOs for the courses API.

use std::fmt::Display;
use std::str::FromStr;

use courses_core::{CourseFilter, CoursePatch, NewCourse, Page};
use serde::Deserialize;
use serde::de::{Deserializer, Error as _};

/// Treat `?field=` the same as leaving the field out.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Query string accepted by the course collection. Empty filter values
/// match everything.
#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl CourseListQuery {
    pub fn filter(&self) -> CourseFilter {
        CourseFilter {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn page(&self) -> Page {
        Page::new(self.limit, self.offset.unwrap_or(0))
    }
}

/// Body for `POST` and `PUT`. Every writable field must be present except
/// `students`, which defaults to no enrolment.
#[derive(Debug, Deserialize)]
pub struct CourseWriteRequest {
    pub name: String,
    #[serde(default)]
    pub students: Vec<i64>,
}

impl From<CourseWriteRequest> for NewCourse {
    fn from(req: CourseWriteRequest) -> Self {
        Self {
            name: req.name,
            students: req.students,
        }
    }
}

/// Body for `PATCH`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CoursePatchRequest {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

impl From<CoursePatchRequest> for CoursePatch {
    fn from(req: CoursePatchRequest) -> Self {
        Self {
            name: req.name,
            students: req.students,
        }
    }
}
