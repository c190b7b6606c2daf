use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::contract::model::{Group, NewGroup};
use crate::domain::repo::GroupsRepository;
use crate::infra::storage::entity::groups::{ActiveModel, Column, Entity};
use crate::infra::storage::mapper::{group_changes, try_collect};

pub struct SeaOrmGroupsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmGroupsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> GroupsRepository for SeaOrmGroupsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Group>> {
        let found = Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found.map(Group::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Group>> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        try_collect(rows)
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Group>> {
        let found = Entity::find()
            .filter(Column::Name.eq(name))
            .one(&self.conn)
            .await
            .context("find_by_name failed")?;
        found.map(Group::try_from).transpose()
    }

    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let count = Entity::find_by_id(id)
            .count(&self.conn)
            .await
            .context("exists_by_id failed")?;
        Ok(count > 0)
    }

    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> anyhow::Result<bool> {
        let mut query = Entity::find().filter(Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }
        let count = query
            .count(&self.conn)
            .await
            .context("name_taken failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, new: NewGroup) -> anyhow::Result<Group> {
        let group = new.with_id(Uuid::new_v4());
        let m = ActiveModel {
            id: Set(group.id),
            ..group_changes(group.clone())
        };
        let _ = m.insert(&self.conn).await.context("insert failed")?;
        Ok(group)
    }

    async fn update(&self, group: Group) -> anyhow::Result<bool> {
        let id = group.id;
        let res = Entity::update_many()
            .set(group_changes(group))
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
