use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait, Statement};

use super::setup_test_db;
use crate::camper;
use crate::db::{connect_with_config, DatabaseConfig};

/// The single in-memory connection is never retired by the pool.
#[tokio::test]
async fn test_in_memory_pool_keeps_its_connection() -> Result<()> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        idle_timeout_secs: 1,
        max_lifetime_secs: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;

    let options = db.get_sqlite_connection_pool().options();
    assert_eq!(options.get_max_connections(), 1);
    assert_eq!(options.get_max_lifetime(), None);
    assert_eq!(options.get_idle_timeout(), None);
    Ok(())
}

#[tokio::test]
async fn test_in_memory_schema_survives_between_queries() -> Result<()> {
    let db = setup_test_db().await?;
    camper::create(&db, Some("Alex"), Some(12)).await?;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS one".to_string());
    assert!(db.query_one(stmt).await?.is_some());
    assert_eq!(camper::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_foreign_keys_enforced_in_memory() -> Result<()> {
    let db = setup_test_db().await?;
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "PRAGMA foreign_keys".to_string());
    let row = db.query_one(stmt).await?.expect("pragma row");
    let enabled: i32 = row.try_get_by_index(0)?;
    assert_eq!(enabled, 1);
    Ok(())
}
