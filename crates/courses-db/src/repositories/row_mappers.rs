//! Row mapping helpers for `SQLite` queries.

use chrono::NaiveDate;
use courses_core::{Course, RepositoryError, Student};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// SELECT list for course queries. Enrolments are folded into one
/// comma-separated column; callers must `GROUP BY c.id`.
pub const COURSE_SELECT: &str = "SELECT c.id, c.name, GROUP_CONCAT(cs.student_id) AS student_ids \
     FROM courses c LEFT JOIN course_students cs ON cs.course_id = c.id";

/// Shared SELECT column list for student queries.
pub const STUDENT_SELECT_COLUMNS: &str = "id, name, birth_date";

/// Format used for `birth_date` columns.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Map a driver error onto the port error type.
pub fn storage_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db)
            if db.is_foreign_key_violation() || db.is_unique_violation() =>
        {
            RepositoryError::Constraint(db.message().to_string())
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

/// Parse a `GROUP_CONCAT` of student ids into a sorted list.
pub fn parse_student_ids(joined: Option<&str>) -> Result<Vec<i64>, RepositoryError> {
    let Some(joined) = joined.filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };

    let mut ids = joined
        .split(',')
        .map(|part| {
            part.trim().parse::<i64>().map_err(|e| {
                RepositoryError::Storage(format!("bad student id {part:?} in enrolment: {e}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    ids.sort_unstable();
    Ok(ids)
}

/// Parse a database row into a Course.
pub fn row_to_course(row: &SqliteRow) -> Result<Course, RepositoryError> {
    let joined: Option<String> = row.try_get("student_ids").map_err(storage_error)?;

    Ok(Course {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        students: parse_student_ids(joined.as_deref())?,
    })
}

/// Parse a database row into a Student.
pub fn row_to_student(row: &SqliteRow) -> Result<Student, RepositoryError> {
    let birth_date: Option<String> = row.try_get("birth_date").map_err(storage_error)?;

    Ok(Student {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        birth_date: birth_date
            .as_deref()
            .map(|s| NaiveDate::parse_from_str(s, DATE_FORMAT))
            .transpose()
            .map_err(|e| RepositoryError::Storage(format!("bad birth_date: {e}")))?,
    })
}

/// Render a date the way `row_to_student` reads it back.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_ids_parse_sorted() {
        assert_eq!(parse_student_ids(Some("3,1,2")).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn missing_enrolment_is_empty() {
        assert!(parse_student_ids(None).unwrap().is_empty());
        assert!(parse_student_ids(Some("")).unwrap().is_empty());
    }

    #[test]
    fn garbage_enrolment_is_storage_error() {
        assert!(matches!(
            parse_student_ids(Some("1,x")),
            Err(RepositoryError::Storage(_))
        ));
    }
}
