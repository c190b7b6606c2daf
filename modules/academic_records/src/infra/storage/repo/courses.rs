use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::contract::model::{Course, NewCourse};
use crate::domain::repo::CoursesRepository;
use crate::infra::storage::entity::courses::{ActiveModel, Column, Entity};
use crate::infra::storage::mapper::course_changes;

pub struct SeaOrmCoursesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmCoursesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    async fn taken(
        &self,
        column: Column,
        value: &str,
        exclude: Option<Uuid>,
    ) -> anyhow::Result<bool> {
        let mut query = Entity::find().filter(column.eq(value));
        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }
        let count = query
            .count(&self.conn)
            .await
            .context("uniqueness check failed")?;
        Ok(count > 0)
    }
}

/// Case-insensitive substring match using Unicode case folding.
///
/// SQLite's `LOWER()` only folds ASCII, so the comparison happens here.
fn name_contains(name: &str, needle_lower: &str) -> bool {
    name.to_lowercase().contains(needle_lower)
}

#[async_trait]
impl<C> CoursesRepository for SeaOrmCoursesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Course>> {
        let found = Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Course>> {
        let rows = Entity::find()
            .order_by_asc(Column::Code)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> anyhow::Result<Vec<Course>> {
        let needle = fragment.to_lowercase();
        let rows = Entity::find()
            .order_by_asc(Column::Code)
            .all(&self.conn)
            .await
            .context("find_by_name_containing failed")?;
        Ok(rows
            .into_iter()
            .filter(|m| name_contains(&m.name, &needle))
            .map(Into::into)
            .collect())
    }

    async fn find_by_credits(&self, credits: i32) -> anyhow::Result<Vec<Course>> {
        let rows = Entity::find()
            .filter(Column::Credits.eq(credits))
            .order_by_asc(Column::Code)
            .all(&self.conn)
            .await
            .context("find_by_credits failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let count = Entity::find_by_id(id)
            .count(&self.conn)
            .await
            .context("exists_by_id failed")?;
        Ok(count > 0)
    }

    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> anyhow::Result<bool> {
        self.taken(Column::Code, code, exclude).await
    }

    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> anyhow::Result<bool> {
        self.taken(Column::Name, name, exclude).await
    }

    async fn insert(&self, new: NewCourse) -> anyhow::Result<Course> {
        let course = new.with_id(Uuid::new_v4());
        let m = ActiveModel {
            id: Set(course.id),
            ..course_changes(course.clone())
        };
        let _ = m.insert(&self.conn).await.context("insert failed")?;
        Ok(course)
    }

    async fn update(&self, course: Course) -> anyhow::Result<bool> {
        let id = course.id;
        let res = Entity::update_many()
            .set(course_changes(course))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .context("update failed")?;
        Ok(res.rows_affected > 0)
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
