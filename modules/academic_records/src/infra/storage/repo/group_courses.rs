use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::contract::model::{GroupCourse, NewGroupCourse};
use crate::domain::repo::GroupCoursesRepository;
use crate::infra::storage::entity::group_courses::{ActiveModel, Column, Entity};

pub struct SeaOrmGroupCoursesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmGroupCoursesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> GroupCoursesRepository for SeaOrmGroupCoursesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<GroupCourse>> {
        let found = Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<GroupCourse>> {
        let rows = Entity::find()
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_group(&self, group_id: Uuid) -> anyhow::Result<Vec<GroupCourse>> {
        let rows = Entity::find()
            .filter(Column::GroupId.eq(group_id))
            .all(&self.conn)
            .await
            .context("find_by_group failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_course(&self, course_id: Uuid) -> anyhow::Result<Vec<GroupCourse>> {
        let rows = Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .all(&self.conn)
            .await
            .context("find_by_course failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let count = Entity::find_by_id(id)
            .count(&self.conn)
            .await
            .context("exists_by_id failed")?;
        Ok(count > 0)
    }

    async fn pair_exists(&self, group_id: Uuid, course_id: Uuid) -> anyhow::Result<bool> {
        let count = Entity::find()
            .filter(Column::GroupId.eq(group_id))
            .filter(Column::CourseId.eq(course_id))
            .count(&self.conn)
            .await
            .context("pair_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, new: NewGroupCourse) -> anyhow::Result<GroupCourse> {
        let link = GroupCourse {
            id: Uuid::new_v4(),
            group_id: new.group_id,
            course_id: new.course_id,
        };
        let m = ActiveModel {
            id: Set(link.id),
            group_id: Set(link.group_id),
            course_id: Set(link.course_id),
        };
        let _ = m.insert(&self.conn).await.context("insert failed")?;
        Ok(link)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Entity::find()
            .count(&self.conn)
            .await
            .context("count failed")
    }
}
