use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Group, GroupInput, NewGroup};
use crate::domain::error::DomainError;
use crate::domain::repo::GroupsRepository;
use crate::domain::validation::{self as v, MIN_DESCRIPTION_LEN, MIN_NAME_LEN};

use super::validated_status;

const ENTITY: &str = "group";

#[derive(Clone)]
pub struct GroupService {
    repo: Arc<dyn GroupsRepository>,
}

impl GroupService {
    pub fn new(repo: Arc<dyn GroupsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "academic_records.groups.create", skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: GroupInput) -> Result<Group, DomainError> {
        info!("Creating group");

        let new = validate(input)?;
        if self
            .repo
            .name_taken(&new.name, None)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(ENTITY, "name", new.name));
        }

        let group = self.repo.insert(new).await.map_err(DomainError::database)?;
        info!(group_id = %group.id, "Group created");
        Ok(group)
    }

    #[instrument(name = "academic_records.groups.get", skip(self), fields(group_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Group>, DomainError> {
        debug!("Getting group by id");
        self.repo.find_by_id(id).await.map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.groups.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Group>, DomainError> {
        self.repo.find_all().await.map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.groups.update", skip(self, input), fields(group_id = %id))]
    pub async fn update(&self, id: Uuid, input: GroupInput) -> Result<bool, DomainError> {
        info!("Updating group");

        let new = validate(input)?;
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
        info!(updated = updated, "Group update finished");
        Ok(updated)
    }

    #[instrument(name = "academic_records.groups.delete", skip(self), fields(group_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting group");

        if !self
            .repo
            .exists_by_id(id)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::not_found(ENTITY, id));
        }
        // Associations pointing at this group are left in place.
        if !self.repo.delete(id).await.map_err(DomainError::database)? {
            return Err(DomainError::not_found(ENTITY, id));
        }
        info!("Group deleted");
        Ok(())
    }

    #[instrument(name = "academic_records.groups.find_by_name", skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, DomainError> {
        if !v::is_not_empty(name) {
            return Err(DomainError::validation("name", v::empty_field_message("name")));
        }
        self.repo
            .find_by_name(name.trim())
            .await
            .map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.groups.count", skip(self))]
    pub async fn count(&self) -> Result<u64, DomainError> {
        let total = self.repo.count().await.map_err(DomainError::database)?;
        debug!("Counted {total} groups");
        Ok(total)
    }
}

fn validate(input: GroupInput) -> Result<NewGroup, DomainError> {
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
    let status = validated_status(&input.status)?;

    Ok(NewGroup {
        name: v::clean_text(&input.name),
        description: v::clean_text(&input.description),
        status,
    })
}
