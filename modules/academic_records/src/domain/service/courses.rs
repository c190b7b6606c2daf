use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Course, CourseInput, NewCourse};
use crate::domain::error::DomainError;
use crate::domain::repo::CoursesRepository;
use crate::domain::validation::{
    self as v, MAX_CREDITS, MIN_CODE_LEN, MIN_CREDITS, MIN_DESCRIPTION_LEN, MIN_NAME_LEN,
};

const ENTITY: &str = "course";

/// Business rules for the course catalogue.
///
/// Creation only enforces code uniqueness; updates enforce code and name.
#[derive(Clone)]
pub struct CourseService {
    repo: Arc<dyn CoursesRepository>,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CoursesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "academic_records.courses.create",
        skip(self, input),
        fields(code = %input.code)
    )]
    pub async fn create(&self, input: CourseInput) -> Result<Course, DomainError> {
        info!("Creating course");

        let new = validate(input)?;

        if self
            .repo
            .code_taken(&new.code, None)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "code", new.code));
        }

        let course = self.repo.insert(new).await.map_err(DomainError::database)?;
        info!(course_id = %course.id, "Course created");
        Ok(course)
    }

    #[instrument(name = "academic_records.courses.get", skip(self), fields(course_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Course>, DomainError> {
        debug!("Getting course by id");
        self.repo.find_by_id(id).await.map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.courses.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Course>, DomainError> {
        self.repo.find_all().await.map_err(DomainError::database)
    }

    #[instrument(
        name = "academic_records.courses.update",
        skip(self, input),
        fields(course_id = %id)
    )]
    pub async fn update(&self, id: Uuid, input: CourseInput) -> Result<bool, DomainError> {
        info!("Updating course");

        let new = validate(input)?;

        if self
            .repo
            .code_taken(&new.code, Some(id))
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "code", new.code));
        }
        if self
            .repo
            .name_taken(&new.name, Some(id))
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "name", new.name));
        }

        let updated = self
            .repo
            .update(new.with_id(id))
            .await
            .map_err(DomainError::database)?;
        info!(updated = updated, "Course update finished");
        Ok(updated)
    }

    #[instrument(name = "academic_records.courses.delete", skip(self), fields(course_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting course");

        if !self
            .repo
            .exists_by_id(id)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::not_found(ENTITY, id));
        }
        // Associations pointing at this course are left in place.
        if !self.repo.delete(id).await.map_err(DomainError::database)? {
            return Err(DomainError::not_found(ENTITY, id));
        }
        info!("Course deleted");
        Ok(())
    }

    /// Case-insensitive substring search on the course name.
    #[instrument(name = "academic_records.courses.search_by_name", skip(self))]
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Course>, DomainError> {
        if !v::is_not_empty(fragment) {
            return Err(DomainError::validation("name", v::empty_field_message("name")));
        }
        let courses = self
            .repo
            .find_by_name_containing(fragment.trim())
            .await
            .map_err(DomainError::database)?;
        debug!("Name search matched {} courses", courses.len());
        Ok(courses)
    }

    #[instrument(name = "academic_records.courses.list_by_credits", skip(self))]
    pub async fn list_by_credits(&self, credits: i32) -> Result<Vec<Course>, DomainError> {
        check_credits(credits)?;
        self.repo
            .find_by_credits(credits)
            .await
            .map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.courses.count", skip(self))]
    pub async fn count(&self) -> Result<u64, DomainError> {
        let total = self.repo.count().await.map_err(DomainError::database)?;
        debug!("Counted {total} courses");
        Ok(total)
    }
}

fn check_credits(credits: i32) -> Result<(), DomainError> {
    if v::is_valid_credits(credits) {
        Ok(())
    } else {
        Err(DomainError::validation(
            "credits",
            format!("credits must be between {MIN_CREDITS} and {MAX_CREDITS}"),
        ))
    }
}

fn validate(input: CourseInput) -> Result<NewCourse, DomainError> {
    if !v::is_valid_length(&input.code, MIN_CODE_LEN) {
        return Err(DomainError::validation(
            "code",
            format!("code must be at least {MIN_CODE_LEN} characters"),
        ));
    }
    if !v::is_valid_length(&input.name, MIN_NAME_LEN) {
        return Err(DomainError::validation(
            "name",
            format!("name must be at least {MIN_NAME_LEN} characters"),
        ));
    }
    if !v::is_valid_length(&input.description, MIN_DESCRIPTION_LEN) {
        return Err(DomainError::validation(
            "description",
            format!("description must be at least {MIN_DESCRIPTION_LEN} characters"),
        ));
    }
    check_credits(input.credits)?;

    Ok(NewCourse {
        code: v::clean_text(&input.code).to_uppercase(),
        name: v::clean_text(&input.name),
        description: v::clean_text(&input.description),
        credits: input.credits,
    })
}
