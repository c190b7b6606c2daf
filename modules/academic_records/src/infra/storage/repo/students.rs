use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::contract::model::{NewStudent, Student};
use crate::domain::repo::StudentsRepository;
use crate::infra::storage::entity::students::{ActiveModel, Column, Entity};
use crate::infra::storage::mapper::{student_changes, try_collect};

pub struct SeaOrmStudentsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmStudentsRepository<C>
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

#[async_trait]
impl<C> StudentsRepository for SeaOrmStudentsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Student>> {
        let found = Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found.map(Student::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Student>> {
        let rows = Entity::find()
            .order_by_asc(Column::FullName)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        try_collect(rows)
    }

    async fn find_by_identifier(&self, identifier: &str) -> anyhow::Result<Option<Student>> {
        let found = Entity::find()
            .filter(Column::Identifier.eq(identifier))
            .one(&self.conn)
            .await
            .context("find_by_identifier failed")?;
        found.map(Student::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Student>> {
        let found = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        found.map(Student::try_from).transpose()
    }

    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let count = Entity::find_by_id(id)
            .count(&self.conn)
            .await
            .context("exists_by_id failed")?;
        Ok(count > 0)
    }

    async fn identifier_taken(
        &self,
        identifier: &str,
        exclude: Option<Uuid>,
    ) -> anyhow::Result<bool> {
        self.taken(Column::Identifier, identifier, exclude).await
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> anyhow::Result<bool> {
        self.taken(Column::Email, email, exclude).await
    }

    async fn insert(&self, new: NewStudent) -> anyhow::Result<Student> {
        let student = new.with_id(Uuid::new_v4());
        let m = ActiveModel {
            id: Set(student.id),
            ..student_changes(student.clone())
        };
        let _ = m.insert(&self.conn).await.context("insert failed")?;
        Ok(student)
    }

    async fn update(&self, student: Student) -> anyhow::Result<bool> {
        let id = student.id;
        let res = Entity::update_many()
            .set(student_changes(student))
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
