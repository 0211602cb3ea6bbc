use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::{activity, camper, errors::ModelError, signup};

#[tokio::test]
async fn test_camper_create_and_read() -> Result<()> {
    let db = setup_test_db().await?;

    let created = camper::create(&db, Some("Alex"), Some(12)).await?;
    assert_eq!(created.name, "Alex");
    assert_eq!(created.age, 12);
    assert_eq!(created.created_at, created.updated_at);

    let found = camper::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.to_string(), format!("<Camper {}: Alex>", created.id));
    Ok(())
}

#[tokio::test]
async fn test_camper_age_bounds_are_inclusive() -> Result<()> {
    let db = setup_test_db().await?;

    camper::create(&db, Some("Youngest"), Some(camper::MIN_AGE)).await?;
    camper::create(&db, Some("Oldest"), Some(camper::MAX_AGE)).await?;

    for age in [Some(7), Some(19), Some(-1), Some(999), None] {
        let err = camper::create(&db, Some("Out of range"), age).await.unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)), "age {age:?} should fail validation");
    }

    assert_eq!(camper::Entity::find().count(&db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn test_camper_name_required() -> Result<()> {
    let db = setup_test_db().await?;

    for name in [None, Some(""), Some("   ")] {
        let err = camper::create(&db, name, Some(10)).await.unwrap_err();
        assert_eq!(err.to_string(), "Camper needs to have a name");
    }

    assert_eq!(camper::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_camper_update_refreshes_timestamp() -> Result<()> {
    let db = setup_test_db().await?;
    let created = camper::create(&db, Some("Sam"), Some(9)).await?;

    let changes = camper::CamperChanges { name: Some("Samantha".into()), age: Some(10) };
    let updated = camper::update(&db, created.clone(), changes).await?;
    assert_eq!(updated.name, "Samantha");
    assert_eq!(updated.age, 10);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
    Ok(())
}

#[tokio::test]
async fn test_camper_update_rejects_invalid_age() -> Result<()> {
    let db = setup_test_db().await?;
    let created = camper::create(&db, Some("Sam"), Some(9)).await?;

    let changes = camper::CamperChanges { name: None, age: Some(999) };
    assert!(camper::update(&db, created.clone(), changes).await.is_err());

    let stored = camper::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(stored.age, 9);
    Ok(())
}

#[test]
fn test_camper_changes_from_json() {
    let body = serde_json::json!({"name": "Jo", "age": 14});
    let changes = camper::CamperChanges::from_json(body.as_object().unwrap()).unwrap();
    assert_eq!(changes, camper::CamperChanges { name: Some("Jo".into()), age: Some(14) });

    let empty = camper::CamperChanges::from_json(&serde_json::Map::new()).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_camper_changes_reject_unknown_and_invalid_fields() {
    let cases = [
        serde_json::json!({"age": 999}),
        serde_json::json!({"age": "twelve"}),
        serde_json::json!({"age": 12.5}),
        serde_json::json!({"age": null}),
        serde_json::json!({"name": ""}),
        serde_json::json!({"name": null}),
        serde_json::json!({"name": 5}),
        serde_json::json!({"id": 3}),
        serde_json::json!({"nickname": "Al"}),
    ];
    for body in cases {
        let res = camper::CamperChanges::from_json(body.as_object().unwrap());
        assert!(matches!(res, Err(ModelError::Validation(_))), "{body} should be rejected");
    }
}

#[tokio::test]
async fn test_activity_create_and_validation() -> Result<()> {
    let db = setup_test_db().await?;

    let created = activity::create(&db, Some("Archery"), Some(2)).await?;
    assert_eq!(created.to_string(), format!("<Activity {}: Archery>", created.id));

    assert!(activity::create(&db, Some(""), Some(2)).await.is_err());
    assert!(activity::create(&db, None, Some(2)).await.is_err());
    assert!(activity::create(&db, Some("Canoeing"), None).await.is_err());

    assert_eq!(activity::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_signup_time_range() -> Result<()> {
    let db = setup_test_db().await?;
    let c = camper::create(&db, Some("Alex"), Some(12)).await?;
    let a = activity::create(&db, Some("Archery"), Some(2)).await?;

    let first = signup::create(&db, c.id, a.id, Some(0)).await?;
    let last = signup::create(&db, c.id, a.id, Some(23)).await?;
    let unscheduled = signup::create(&db, c.id, a.id, None).await?;
    assert_eq!(first.time, Some(0));
    assert_eq!(last.time, Some(23));
    assert_eq!(unscheduled.time, None);

    for time in [-1, 24, 100] {
        let err = signup::create(&db, c.id, a.id, Some(time)).await.unwrap_err();
        assert_eq!(err.to_string(), "Signup time must be between 0 and 23");
    }

    assert_eq!(signup::Entity::find().count(&db).await?, 3);
    Ok(())
}

#[tokio::test]
async fn test_signup_requires_existing_parents() -> Result<()> {
    let db = setup_test_db().await?;
    let a = activity::create(&db, Some("Archery"), Some(2)).await?;

    let err = signup::create(&db, 404, a.id, Some(10)).await.unwrap_err();
    assert!(matches!(err, ModelError::Constraint(_)), "unexpected error: {err:?}");
    assert_eq!(signup::Entity::find().count(&db).await?, 0);
    Ok(())
}
