use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{info, warn};

use models::{activity, camper, signup};
use crate::errors::ServiceError;

/// Message for a signup body that names no usable camper and activity.
pub const LINK_ERROR: &str = "Validation error";

/// All signups ordered by id.
pub async fn list_signups(db: &DatabaseConnection) -> Result<Vec<signup::Model>, ServiceError> {
    Ok(signup::Entity::find().order_by_asc(signup::Column::Id).all(db).await?)
}

/// Sign a camper up for an activity and return that activity.
///
/// Both ids are required and must name existing rows; otherwise the call
/// fails with a validation error and nothing is written.
pub async fn create_signup(
    db: &DatabaseConnection,
    camper_id: Option<i32>,
    activity_id: Option<i32>,
    time: Option<i32>,
) -> Result<activity::Model, ServiceError> {
    let (Some(camper_id), Some(activity_id)) = (camper_id, activity_id) else {
        warn!(?camper_id, ?activity_id, "signup missing linkage field");
        return Err(ServiceError::Validation(LINK_ERROR.into()));
    };

    let txn = db.begin().await?;
    let found_camper = camper::Entity::find_by_id(camper_id).one(&txn).await?;
    let found_activity = activity::Entity::find_by_id(activity_id).one(&txn).await?;
    let (Some(found_camper), Some(found_activity)) = (found_camper, found_activity) else {
        warn!(camper_id, activity_id, "signup references unknown camper or activity");
        return Err(ServiceError::Validation(LINK_ERROR.into()));
    };

    let created = signup::create(&txn, found_camper.id, found_activity.id, time).await?;
    txn.commit().await?;
    info!(id = created.id, camper_id, activity_id, "created signup");
    Ok(found_activity)
}
