use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::info;

use models::{activity, camper, signup};
use crate::errors::ServiceError;

/// All activities ordered by id.
pub async fn list_activities(db: &DatabaseConnection) -> Result<Vec<activity::Model>, ServiceError> {
    Ok(activity::Entity::find().order_by_asc(activity::Column::Id).all(db).await?)
}

/// Validate and insert an activity in its own transaction.
pub async fn create_activity(db: &DatabaseConnection, name: Option<&str>, difficulty: Option<i32>) -> Result<activity::Model, ServiceError> {
    let txn = db.begin().await?;
    let created = activity::create(&txn, name, difficulty).await?;
    txn.commit().await?;
    info!(id = created.id, activity = %created, "created activity");
    Ok(created)
}

/// Get activity by id.
pub async fn get_activity(db: &DatabaseConnection, id: i32) -> Result<Option<activity::Model>, ServiceError> {
    Ok(activity::Entity::find_by_id(id).one(db).await?)
}

/// Campers signed up for the activity.
pub async fn campers_of_activity(db: &DatabaseConnection, id: i32) -> Result<Vec<camper::Model>, ServiceError> {
    let found = get_activity(db, id).await?.ok_or_else(|| ServiceError::not_found("activity"))?;
    Ok(found.find_related(camper::Entity).order_by_asc(camper::Column::Id).all(db).await?)
}

/// Delete an activity together with its signups.
/// Returns `Ok(false)` when no such activity exists.
pub async fn delete_activity(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    if activity::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Ok(false);
    }
    let removed = signup::Entity::delete_many()
        .filter(signup::Column::ActivityId.eq(id))
        .exec(&txn)
        .await?;
    activity::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(id, signups = removed.rows_affected, "deleted activity");
    Ok(true)
}
