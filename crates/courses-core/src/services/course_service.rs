//! Course service - validates input and orchestrates course CRUD.

use std::sync::Arc;

use crate::domain::validation::{normalize_course_name, normalize_student_ids, validate_page};
use crate::domain::{Course, CourseFilter, CoursePatch, NewCourse, Page, ValidationError};
use crate::ports::{CoreError, CourseRepository, StudentRepository};

/// Service for course operations.
///
/// Names are trimmed and length-checked, student ids are de-duplicated and
/// must refer to existing students. Everything else is delegated to the
/// injected `CourseRepository`.
pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
    students: Arc<dyn StudentRepository>,
}

impl CourseService {
    /// Create a new course service.
    pub fn new(repo: Arc<dyn CourseRepository>, students: Arc<dyn StudentRepository>) -> Self {
        Self { repo, students }
    }

    /// List courses matching `filter`, in creation order.
    pub async fn list(
        &self,
        filter: &CourseFilter,
        page: &Page,
    ) -> Result<Vec<Course>, CoreError> {
        validate_page(page)?;
        self.repo.list(filter, page).await.map_err(CoreError::from)
    }

    /// Count courses matching `filter`.
    pub async fn count(&self, filter: &CourseFilter) -> Result<u64, CoreError> {
        self.repo.count(filter).await.map_err(CoreError::from)
    }

    /// Get a course by ID.
    pub async fn get(&self, id: i64) -> Result<Course, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create a course.
    pub async fn create(&self, course: NewCourse) -> Result<Course, CoreError> {
        let course = NewCourse {
            name: normalize_course_name(&course.name)?,
            students: self.checked_students(&course.students).await?,
        };

        let created = self.repo.insert(&course).await?;
        tracing::info!(
            course_id = created.id,
            students = created.students.len(),
            "Course created"
        );
        Ok(created)
    }

    /// Apply a partial update. Applying the same patch twice yields the same course.
    pub async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, CoreError> {
        let name = patch
            .name
            .as_deref()
            .map(normalize_course_name)
            .transpose()?;
        let students = match patch.students {
            Some(ids) => Some(self.checked_students(&ids).await?),
            None => None,
        };

        let patch = CoursePatch { name, students };
        if patch.is_empty() {
            return self.get(id).await;
        }

        let updated = self.repo.update(id, &patch).await?;
        tracing::info!(course_id = id, "Course updated");
        Ok(updated)
    }

    /// Replace every writable field of a course.
    pub async fn replace(&self, id: i64, course: NewCourse) -> Result<Course, CoreError> {
        self.update(id, CoursePatch::from(course)).await
    }

    /// Delete a course by ID.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        tracing::info!(course_id = id, "Course deleted");
        Ok(())
    }

    async fn checked_students(&self, ids: &[i64]) -> Result<Vec<i64>, CoreError> {
        let ids = normalize_student_ids(ids)?;
        if ids.is_empty() {
            return Ok(ids);
        }

        let existing = self.students.existing_ids(&ids).await?;
        let missing: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| existing.binary_search(id).is_err())
            .collect();

        if missing.is_empty() {
            Ok(ids)
        } else {
            Err(ValidationError::UnknownStudents(missing).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use crate::ports::course_repository::MockCourseRepository;
    use crate::ports::student_repository::MockStudentRepository;
    use mockall::predicate::eq;

    fn service(courses: MockCourseRepository, students: MockStudentRepository) -> CourseService {
        CourseService::new(Arc::new(courses), Arc::new(students))
    }

    #[tokio::test]
    async fn create_trims_name_and_dedups_students() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_insert()
            .withf(|c| c.name == "math" && c.students == vec![1, 2])
            .times(1)
            .returning(|c| {
                Ok(Course {
                    id: 1,
                    name: c.name.clone(),
                    students: c.students.clone(),
                })
            });

        let mut students = MockStudentRepository::new();
        students
            .expect_existing_ids()
            .returning(|ids| Ok(ids.to_vec()));

        let created = service(courses, students)
            .create(NewCourse::new("  math ").with_students(vec![2, 1, 2]))
            .await
            .unwrap();

        assert_eq!(created.name, "math");
        assert_eq!(created.students, vec![1, 2]);
    }

    #[tokio::test]
    async fn create_rejects_blank_name_without_touching_storage() {
        let mut courses = MockCourseRepository::new();
        courses.expect_insert().never();

        let err = service(courses, MockStudentRepository::new())
            .create(NewCourse::new("   "))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_students() {
        let mut courses = MockCourseRepository::new();
        courses.expect_insert().never();

        let mut students = MockStudentRepository::new();
        students.expect_existing_ids().returning(|_| Ok(vec![1]));

        let err = service(courses, students)
            .create(NewCourse::new("math").with_students(vec![1, 5, 9]))
            .await
            .unwrap_err();

        match err {
            CoreError::Validation(msg) => assert!(msg.contains("[5, 9]"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_patch_reads_current_state() {
        let mut courses = MockCourseRepository::new();
        courses.expect_update().never();
        courses
            .expect_get_by_id()
            .with(eq(3))
            .returning(|id| {
                Ok(Course {
                    id,
                    name: "art".to_string(),
                    students: vec![],
                })
            });

        let course = service(courses, MockStudentRepository::new())
            .update(3, CoursePatch::default())
            .await
            .unwrap();

        assert_eq!(course.name, "art");
    }

    #[tokio::test]
    async fn update_of_missing_course_is_not_found() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_update()
            .returning(|id, _| Err(RepositoryError::NotFound(format!("Course with ID {id}"))));

        let err = service(courses, MockStudentRepository::new())
            .update(42, CoursePatch::rename("math"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_checks_patched_students() {
        let mut courses = MockCourseRepository::new();
        courses.expect_update().never();

        let mut students = MockStudentRepository::new();
        students.expect_existing_ids().returning(|_| Ok(vec![1]));

        let patch = CoursePatch {
            name: None,
            students: Some(vec![1, 7]),
        };
        let err = service(courses, students)
            .update(3, patch)
            .await
            .unwrap_err();

        match err {
            CoreError::Validation(msg) => assert!(msg.contains("[7]"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_rejects_oversized_page() {
        let mut courses = MockCourseRepository::new();
        courses.expect_list().never();

        let err = service(courses, MockStudentRepository::new())
            .list(&CourseFilter::all(), &Page::new(Some(0), 0))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }
}
