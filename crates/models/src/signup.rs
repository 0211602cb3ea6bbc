use std::fmt;

use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{activity, camper, errors::ModelError};

pub const EARLIEST_HOUR: i32 = 0;
pub const LATEST_HOUR: i32 = 23;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "signups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub time: Option<i32>,
    pub camper_id: i32,
    pub activity_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Camper,
    Activity,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Camper => Entity::belongs_to(camper::Entity)
                .from(Column::CamperId)
                .to(camper::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Activity => Entity::belongs_to(activity::Entity)
                .from(Column::ActivityId)
                .to(activity::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<camper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camper.def()
    }
}

impl Related<activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Signup {}>", self.id)
    }
}

/// An unset time is allowed; a set one must be an hour of the day.
pub fn validate_time(time: Option<i32>) -> Result<Option<i32>, ModelError> {
    match time {
        Some(t) if !(EARLIEST_HOUR..=LATEST_HOUR).contains(&t) => Err(ModelError::validation(format!(
            "Signup time must be between {EARLIEST_HOUR} and {LATEST_HOUR}"
        ))),
        other => Ok(other),
    }
}

/// Insert a signup for ids the caller has already resolved.
pub async fn create<C: ConnectionTrait>(db: &C, camper_id: i32, activity_id: i32, time: Option<i32>) -> Result<Model, ModelError> {
    let time = validate_time(time)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        time: Set(time),
        camper_id: Set(camper_id),
        activity_id: Set(activity_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
