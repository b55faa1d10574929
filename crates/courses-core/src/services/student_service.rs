//! Student service - thin facade over `StudentRepository`.

use std::sync::Arc;

use crate::domain::{NewStudent, Student, ValidationError};
use crate::ports::{CoreError, StudentRepository};

pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Student>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    pub async fn get(&self, id: i64) -> Result<Student, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Add a student. The name must not be blank.
    pub async fn create(&self, student: NewStudent) -> Result<Student, CoreError> {
        let name = student.name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName.into());
        }

        let student = NewStudent {
            name: name.to_string(),
            ..student
        };
        let created = self.repo.insert(&student).await?;
        tracing::debug!(student_id = created.id, "Student created");
        Ok(created)
    }
}
