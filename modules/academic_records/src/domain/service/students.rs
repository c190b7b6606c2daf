use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewStudent, Student, StudentInput};
use crate::domain::error::DomainError;
use crate::domain::repo::StudentsRepository;
use crate::domain::validation::{self as v, MIN_NAME_LEN};

use super::validated_status;

const ENTITY: &str = "student";

/// Business rules for student records.
#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentsRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "academic_records.students.create",
        skip(self, input),
        fields(identifier = %input.identifier)
    )]
    pub async fn create(&self, input: StudentInput) -> Result<Student, DomainError> {
        info!("Creating student");

        let new = validate(input)?;

        if self
            .repo
            .identifier_taken(&new.identifier, None)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "identifier", new.identifier));
        }
        if self
            .repo
            .email_taken(&new.email, None)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "email", new.email));
        }

        let student = self.repo.insert(new).await.map_err(DomainError::database)?;
        info!(student_id = %student.id, "Student created");
        Ok(student)
    }

    #[instrument(name = "academic_records.students.get", skip(self), fields(student_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Student>, DomainError> {
        debug!("Getting student by id");
        self.repo.find_by_id(id).await.map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.students.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Student>, DomainError> {
        let students = self.repo.find_all().await.map_err(DomainError::database)?;
        debug!("Listed {} students", students.len());
        Ok(students)
    }

    /// Replace the student `id`. `Ok(false)` when no such record was stored.
    #[instrument(
        name = "academic_records.students.update",
        skip(self, input),
        fields(student_id = %id)
    )]
    pub async fn update(&self, id: Uuid, input: StudentInput) -> Result<bool, DomainError> {
        info!("Updating student");

        let new = validate(input)?;

        if self
            .repo
            .identifier_taken(&new.identifier, Some(id))
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "identifier", new.identifier));
        }
        if self
            .repo
            .email_taken(&new.email, Some(id))
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "email", new.email));
        }

        let updated = self
            .repo
            .update(new.with_id(id))
            .await
            .map_err(DomainError::database)?;
        info!(updated = updated, "Student update finished");
        Ok(updated)
    }

    #[instrument(name = "academic_records.students.delete", skip(self), fields(student_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting student");

        if !self
            .repo
            .exists_by_id(id)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::not_found(ENTITY, id));
        }

        if !self.repo.delete(id).await.map_err(DomainError::database)? {
            return Err(DomainError::not_found(ENTITY, id));
        }
        info!("Student deleted");
        Ok(())
    }

    #[instrument(name = "academic_records.students.find_by_identifier", skip(self))]
    pub async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Student>, DomainError> {
        if !v::is_not_empty(identifier) {
            return Err(DomainError::validation(
                "identifier",
                v::empty_field_message("identifier"),
            ));
        }
        self.repo
            .find_by_identifier(identifier.trim())
            .await
            .map_err(DomainError::database)
    }

    /// Emails are stored lowercased, so the query is matched the same way.
    #[instrument(name = "academic_records.students.find_by_email", skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DomainError> {
        if !v::is_not_empty(email) {
            return Err(DomainError::validation("email", v::empty_field_message("email")));
        }
        self.repo
            .find_by_email(&v::clean_text(email).to_lowercase())
            .await
            .map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.students.count", skip(self))]
    pub async fn count(&self) -> Result<u64, DomainError> {
        let total = self.repo.count().await.map_err(DomainError::database)?;
        debug!("Counted {total} students");
        Ok(total)
    }
}

/// Check every field, then return the normalized record.
fn validate(input: StudentInput) -> Result<NewStudent, DomainError> {
    if !v::is_valid_length(&input.full_name, MIN_NAME_LEN) {
        return Err(DomainError::validation(
            "full_name",
            format!("name must be at least {MIN_NAME_LEN} characters"),
        ));
    }
    if !v::is_valid_identification(&input.identifier) {
        return Err(DomainError::validation(
            "identifier",
            "identifier must have between 9 and 12 digits",
        ));
    }
    if !v::is_valid_email(&input.email) {
        return Err(DomainError::validation(
            "email",
            v::invalid_format_message("email"),
        ));
    }
    let birth_date = match input.birth_date {
        Some(d) if v::is_valid_birth_date(d) => d,
        _ => {
            return Err(DomainError::validation(
                "birth_date",
                "birth date must be in the past and within the last 100 years",
            ))
        }
    };
    let status = validated_status(&input.status)?;

    Ok(NewStudent {
        full_name: v::clean_text(&input.full_name),
        identifier: v::clean_text(&input.identifier),
        email: v::clean_text(&input.email).to_lowercase(),
        birth_date,
        status,
    })
}
