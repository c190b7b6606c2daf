use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewProfessor, Professor, ProfessorInput};
use crate::domain::error::DomainError;
use crate::domain::repo::ProfessorsRepository;
use crate::domain::validation::{self as v, MIN_DEPARTMENT_LEN, MIN_NAME_LEN};

use super::validated_status;

const ENTITY: &str = "professor";

/// Business rules for professor records.
#[derive(Clone)]
pub struct ProfessorService {
    repo: Arc<dyn ProfessorsRepository>,
}

impl ProfessorService {
    pub fn new(repo: Arc<dyn ProfessorsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "academic_records.professors.create",
        skip(self, input),
        fields(identifier = %input.identifier)
    )]
    pub async fn create(&self, input: ProfessorInput) -> Result<Professor, DomainError> {
        info!("Creating professor");

        let new = validate(input)?;
        self.ensure_unique(&new, None).await?;

        let professor = self.repo.insert(new).await.map_err(DomainError::database)?;
        info!(professor_id = %professor.id, "Professor created");
        Ok(professor)
    }

    #[instrument(name = "academic_records.professors.get", skip(self), fields(professor_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Professor>, DomainError> {
        debug!("Getting professor by id");
        self.repo.find_by_id(id).await.map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.professors.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Professor>, DomainError> {
        self.repo.find_all().await.map_err(DomainError::database)
    }

    #[instrument(
        name = "academic_records.professors.update",
        skip(self, input),
        fields(professor_id = %id)
    )]
    pub async fn update(&self, id: Uuid, input: ProfessorInput) -> Result<bool, DomainError> {
        info!("Updating professor");

        let new = validate(input)?;
        self.ensure_unique(&new, Some(id)).await?;

        let updated = self
            .repo
            .update(new.with_id(id))
            .await
            .map_err(DomainError::database)?;
        info!(updated = updated, "Professor update finished");
        Ok(updated)
    }

    #[instrument(
        name = "academic_records.professors.delete",
        skip(self),
        fields(professor_id = %id)
    )]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting professor");

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
        info!("Professor deleted");
        Ok(())
    }

    #[instrument(name = "academic_records.professors.find_by_identifier", skip(self))]
    pub async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Professor>, DomainError> {
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
    #[instrument(name = "academic_records.professors.find_by_email", skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Professor>, DomainError> {
        if !v::is_not_empty(email) {
            return Err(DomainError::validation("email", v::empty_field_message("email")));
        }
        self.repo
            .find_by_email(&v::clean_text(email).to_lowercase())
            .await
            .map_err(DomainError::database)
    }

    /// Exact-match department filter.
    #[instrument(name = "academic_records.professors.list_by_department", skip(self))]
    pub async fn list_by_department(
        &self,
        department: &str,
    ) -> Result<Vec<Professor>, DomainError> {
        if !v::is_not_empty(department) {
            return Err(DomainError::validation(
                "department",
                v::empty_field_message("department"),
            ));
        }
        let professors = self
            .repo
            .find_by_department(department.trim())
            .await
            .map_err(DomainError::database)?;
        debug!("Found {} professors in department", professors.len());
        Ok(professors)
    }

    #[instrument(name = "academic_records.professors.count", skip(self))]
    pub async fn count(&self) -> Result<u64, DomainError> {
        let total = self.repo.count().await.map_err(DomainError::database)?;
        debug!("Counted {total} professors");
        Ok(total)
    }

    async fn ensure_unique(
        &self,
        new: &NewProfessor,
        exclude: Option<Uuid>,
    ) -> Result<(), DomainError> {
        if self
            .repo
            .identifier_taken(&new.identifier, exclude)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(
                ENTITY,
                "identifier",
                new.identifier.clone(),
            ));
        }
        if self
            .repo
            .email_taken(&new.email, exclude)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "email", new.email.clone()));
        }
        Ok(())
    }
}

fn validate(input: ProfessorInput) -> Result<NewProfessor, DomainError> {
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
    if !v::is_valid_length(&input.department, MIN_DEPARTMENT_LEN) {
        return Err(DomainError::validation(
            "department",
            format!("department must be at least {MIN_DEPARTMENT_LEN} characters"),
        ));
    }
    let status = validated_status(&input.status)?;

    Ok(NewProfessor {
        full_name: v::clean_text(&input.full_name),
        identifier: v::clean_text(&input.identifier),
        email: v::clean_text(&input.email).to_lowercase(),
        department: v::clean_text(&input.department),
        status,
    })
}
