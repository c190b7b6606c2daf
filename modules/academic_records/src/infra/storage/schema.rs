use anyhow::Context;
use sea_orm::{ConnectionTrait, EntityName, EntityTrait, Schema};
use tracing::{debug, info};

use crate::infra::storage::entity::{courses, group_courses, groups, professors, students};

/// Create every table that does not exist yet. Safe to call on each start.
pub async fn bootstrap_schema<C>(conn: &C) -> anyhow::Result<()>
where
    C: ConnectionTrait,
{
    let schema = Schema::new(conn.get_database_backend());

    create_table(conn, &schema, students::Entity).await?;
    create_table(conn, &schema, professors::Entity).await?;
    create_table(conn, &schema, courses::Entity).await?;
    create_table(conn, &schema, groups::Entity).await?;
    create_table(conn, &schema, group_courses::Entity).await?;

    info!("Academic records schema ready");
    Ok(())
}

async fn create_table<C, E>(conn: &C, schema: &Schema, entity: E) -> anyhow::Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let table = entity.table_name().to_owned();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    conn.execute(conn.get_database_backend().build(&stmt))
        .await
        .with_context(|| format!("create table {table} failed"))?;
    debug!(table = %table, "Table ensured");
    Ok(())
}
