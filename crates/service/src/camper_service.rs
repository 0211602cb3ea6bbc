use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::info;

use models::{activity, camper, camper::CamperChanges, signup, views::CamperDetailView};
use crate::errors::ServiceError;

/// All campers ordered by id.
pub async fn list_campers(db: &DatabaseConnection) -> Result<Vec<camper::Model>, ServiceError> {
    Ok(camper::Entity::find().order_by_asc(camper::Column::Id).all(db).await?)
}

/// Validate and insert a camper in its own transaction.
pub async fn create_camper(db: &DatabaseConnection, name: Option<&str>, age: Option<i32>) -> Result<camper::Model, ServiceError> {
    let txn = db.begin().await?;
    let created = camper::create(&txn, name, age).await?;
    txn.commit().await?;
    info!(id = created.id, camper = %created, "created camper");
    Ok(created)
}

/// Get camper by id.
pub async fn get_camper(db: &DatabaseConnection, id: i32) -> Result<Option<camper::Model>, ServiceError> {
    Ok(camper::Entity::find_by_id(id).one(db).await?)
}

/// Camper with its signups, rendered for the detail context.
pub async fn get_camper_detail(db: &DatabaseConnection, id: i32) -> Result<Option<CamperDetailView>, ServiceError> {
    let Some(found) = get_camper(db, id).await? else { return Ok(None) };
    let signups = found
        .find_related(signup::Entity)
        .order_by_asc(signup::Column::Id)
        .all(db)
        .await?;
    Ok(Some(CamperDetailView::new(&found, &signups)))
}

/// Activities the camper is signed up for.
pub async fn activities_of_camper(db: &DatabaseConnection, id: i32) -> Result<Vec<activity::Model>, ServiceError> {
    let found = get_camper(db, id).await?.ok_or_else(|| ServiceError::not_found("camper"))?;
    Ok(found.find_related(activity::Entity).order_by_asc(activity::Column::Id).all(db).await?)
}

/// Apply validated changes. Nothing is written when validation fails.
pub async fn update_camper(db: &DatabaseConnection, id: i32, changes: CamperChanges) -> Result<camper::Model, ServiceError> {
    let txn = db.begin().await?;
    let found = camper::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("camper"))?;
    let updated = camper::update(&txn, found, changes).await?;
    txn.commit().await?;
    info!(id = updated.id, "updated camper");
    Ok(updated)
}

/// Delete a camper together with its signups.
/// Returns `Ok(false)` when no such camper exists.
pub async fn delete_camper(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    if camper::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Ok(false);
    }
    let removed = signup::Entity::delete_many()
        .filter(signup::Column::CamperId.eq(id))
        .exec(&txn)
        .await?;
    camper::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(id, signups = removed.rows_affected, "deleted camper");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::errors::ModelError;

    #[tokio::test]
    async fn camper_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let c = create_camper(&db, Some("Alex"), Some(12)).await?;
        let found = get_camper(&db, c.id).await?.unwrap();
        assert_eq!(found.id, c.id);

        let changes = CamperChanges { name: Some("Alexis".into()), age: None };
        let updated = update_camper(&db, c.id, changes).await?;
        assert_eq!(updated.name, "Alexis");
        assert_eq!(updated.age, 12);

        assert!(delete_camper(&db, c.id).await?);
        assert!(get_camper(&db, c.id).await?.is_none());
        assert!(!delete_camper(&db, c.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields_without_persisting() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let err = create_camper(&db, Some("Too old"), Some(19)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(ModelError::Validation(_))));
        assert!(err.is_client_error());

        let err = create_camper(&db, None, Some(12)).await.unwrap_err();
        assert_eq!(err.to_string(), "Camper needs to have a name");

        assert!(list_campers(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for (name, age) in [("Zed", 10), ("Amy", 11), ("Kim", 12)] {
            create_camper(&db, Some(name), Some(age)).await?;
        }
        let names: Vec<_> = list_campers(&db).await?.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Kim"]);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_camper_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_camper(&db, 99, CamperChanges::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn detail_includes_signups() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_camper(&db, Some("Alex"), Some(12)).await?;
        let a = activity::create(&db, Some("Archery"), Some(2)).await?;
        signup::create(&db, c.id, a.id, Some(8)).await?;

        let detail = get_camper_detail(&db, c.id).await?.unwrap();
        assert_eq!(detail.signups.len(), 1);
        assert_eq!(detail.signups[0].activity_id, a.id);
        assert_eq!(detail.signups[0].time, Some(8));

        let activities = activities_of_camper(&db, c.id).await?;
        assert_eq!(activities.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), vec!["Archery"]);

        assert!(get_camper_detail(&db, 404).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_owned_signups() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_camper(&db, Some("Alex"), Some(12)).await?;
        let other = create_camper(&db, Some("Sam"), Some(13)).await?;
        let a = activity::create(&db, Some("Archery"), Some(2)).await?;
        signup::create(&db, c.id, a.id, Some(8)).await?;
        signup::create(&db, other.id, a.id, Some(9)).await?;

        assert!(delete_camper(&db, c.id).await?);

        let left = signup::Entity::find().all(&db).await?;
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].camper_id, other.id);
        Ok(())
    }
}
