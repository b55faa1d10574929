//! `SQLite` implementation of the `StudentRepository` trait.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use courses_core::{NewStudent, RepositoryError, Student, StudentRepository};

use super::row_mappers::{STUDENT_SELECT_COLUMNS, format_date, row_to_student, storage_error};

/// `SQLite` implementation of the `StudentRepository` trait.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new `SQLite` student repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        let query = format!("SELECT {STUDENT_SELECT_COLUMNS} FROM students ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_student).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, RepositoryError> {
        let query = format!("SELECT {STUDENT_SELECT_COLUMNS} FROM students WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Student with ID {id}")))?;

        row_to_student(&row)
    }

    async fn insert(&self, student: &NewStudent) -> Result<Student, RepositoryError> {
        let result = sqlx::query("INSERT INTO students (name, birth_date) VALUES (?, ?)")
            .bind(&student.name)
            .bind(student.birth_date.map(format_date))
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(Student {
            id: result.last_insert_rowid(),
            name: student.name.clone(),
            birth_date: student.birth_date,
        })
    }

    async fn existing_ids(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id FROM students WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        builder
            .build_query_scalar::<i64>()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Student with ID {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup_test_database;
    use chrono::NaiveDate;

    async fn repo() -> SqliteStudentRepository {
        SqliteStudentRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn insert_then_get_round_trips_birth_date() {
        let repo = repo().await;
        let birth_date = NaiveDate::from_ymd_opt(2001, 2, 3);

        let created = repo
            .insert(&NewStudent {
                name: "Ada".to_string(),
                birth_date,
            })
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.birth_date, birth_date);
        assert_eq!(repo.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn existing_ids_returns_known_subset() {
        let repo = repo().await;
        let a = repo.insert(&NewStudent::new("a")).await.unwrap();
        let b = repo.insert(&NewStudent::new("b")).await.unwrap();

        let found = repo.existing_ids(&[b.id, 999, a.id]).await.unwrap();
        assert_eq!(found, vec![a.id, b.id]);
        assert!(repo.existing_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_student_is_not_found() {
        let repo = repo().await;
        assert!(matches!(
            repo.delete(1).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
