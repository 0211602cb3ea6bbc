use std::fmt;

use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{camper, errors::ModelError, signup};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Signups,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Signups => Entity::has_many(signup::Entity).into(),
        }
    }
}

impl Related<signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Signups.def()
    }
}

/// Campers signed up for an activity, reached through `signups`.
impl Related<camper::Entity> for Entity {
    fn to() -> RelationDef {
        signup::Relation::Camper.def()
    }

    fn via() -> Option<RelationDef> {
        Some(signup::Relation::Activity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Activity {}: {}>", self.id, self.name)
    }
}

pub fn validate_name(name: Option<&str>) -> Result<String, ModelError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n.to_string()),
        _ => Err(ModelError::validation("Activity needs to have a name")),
    }
}

pub fn validate_difficulty(difficulty: Option<i32>) -> Result<i32, ModelError> {
    difficulty.ok_or_else(|| ModelError::validation("Activity needs a difficulty"))
}

pub async fn create<C: ConnectionTrait>(db: &C, name: Option<&str>, difficulty: Option<i32>) -> Result<Model, ModelError> {
    let name = validate_name(name)?;
    let difficulty = validate_difficulty(difficulty)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        name: Set(name),
        difficulty: Set(difficulty),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
