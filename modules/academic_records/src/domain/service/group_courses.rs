use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{GroupCourse, NewGroupCourse};
use crate::domain::error::DomainError;
use crate::domain::repo::{CoursesRepository, GroupCoursesRepository, GroupsRepository};

const ENTITY: &str = "group-course association";

/// Links groups to courses. Needs the group and course gateways to check
/// that both ends exist when an association is created.
#[derive(Clone)]
pub struct GroupCourseService {
    repo: Arc<dyn GroupCoursesRepository>,
    groups: Arc<dyn GroupsRepository>,
    courses: Arc<dyn CoursesRepository>,
}

impl GroupCourseService {
    pub fn new(
        repo: Arc<dyn GroupCoursesRepository>,
        groups: Arc<dyn GroupsRepository>,
        courses: Arc<dyn CoursesRepository>,
    ) -> Self {
        Self {
            repo,
            groups,
            courses,
        }
    }

    #[instrument(name = "academic_records.group_courses.create", skip(self))]
    pub async fn create(
        &self,
        group_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<GroupCourse, DomainError> {
        info!("Creating group-course association");

        let group_id =
            group_id.ok_or_else(|| DomainError::validation("group_id", "group id is required"))?;
        let course_id = course_id
            .ok_or_else(|| DomainError::validation("course_id", "course id is required"))?;

        if !self
            .groups
            .exists_by_id(group_id)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::not_found("group", group_id));
        }
        if !self
            .courses
            .exists_by_id(course_id)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::not_found("course", course_id));
        }
        if self
            .repo
            .pair_exists(group_id, course_id)
            .await
            .map_err(DomainError::database)?
        {
            return Err(DomainError::conflict(
                ENTITY,
                "group_id/course_id",
                format!("{group_id}/{course_id}"),
            ));
        }

        let link = self
            .repo
            .insert(NewGroupCourse {
                group_id,
                course_id,
            })
            .await
            .map_err(DomainError::database)?;
        info!(association_id = %link.id, "Association created");
        Ok(link)
    }

    #[instrument(
        name = "academic_records.group_courses.get",
        skip(self),
        fields(association_id = %id)
    )]
    pub async fn get(&self, id: Uuid) -> Result<Option<GroupCourse>, DomainError> {
        self.repo.find_by_id(id).await.map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.group_courses.list", skip(self))]
    pub async fn list(&self) -> Result<Vec<GroupCourse>, DomainError> {
        self.repo.find_all().await.map_err(DomainError::database)
    }

    #[instrument(
        name = "academic_records.group_courses.delete",
        skip(self),
        fields(association_id = %id)
    )]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting association");

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
        info!("Association deleted");
        Ok(())
    }

    /// All associations of `group_id`; an empty list is a normal result.
    #[instrument(name = "academic_records.group_courses.list_by_group", skip(self))]
    pub async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<GroupCourse>, DomainError> {
        let links = self
            .repo
            .find_by_group(group_id)
            .await
            .map_err(DomainError::database)?;
        debug!("Group has {} associations", links.len());
        Ok(links)
    }

    #[instrument(name = "academic_records.group_courses.list_by_course", skip(self))]
    pub async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<GroupCourse>, DomainError> {
        let links = self
            .repo
            .find_by_course(course_id)
            .await
            .map_err(DomainError::database)?;
        debug!("Course has {} associations", links.len());
        Ok(links)
    }

    /// Missing ids answer `false` instead of failing.
    #[instrument(name = "academic_records.group_courses.exists_association", skip(self))]
    pub async fn exists_association(
        &self,
        group_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<bool, DomainError> {
        let (Some(group_id), Some(course_id)) = (group_id, course_id) else {
            debug!("Association lookup with a missing id");
            return Ok(false);
        };
        self.repo
            .pair_exists(group_id, course_id)
            .await
            .map_err(DomainError::database)
    }

    #[instrument(name = "academic_records.group_courses.count", skip(self))]
    pub async fn count(&self) -> Result<u64, DomainError> {
        let total = self.repo.count().await.map_err(DomainError::database)?;
        debug!("Counted {total} associations");
        Ok(total)
    }
}
