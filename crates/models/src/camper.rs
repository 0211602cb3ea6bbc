use std::fmt;

use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{activity, errors::ModelError, signup};

pub const MIN_AGE: i32 = 8;
pub const MAX_AGE: i32 = 18;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "campers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
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

/// Activities a camper is signed up for, reached through `signups`.
impl Related<activity::Entity> for Entity {
    fn to() -> RelationDef {
        signup::Relation::Activity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(signup::Relation::Camper.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Camper {}: {}>", self.id, self.name)
    }
}

pub fn validate_name(name: Option<&str>) -> Result<String, ModelError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n.to_string()),
        _ => Err(ModelError::validation("Camper needs to have a name")),
    }
}

pub fn validate_age(age: Option<i32>) -> Result<i32, ModelError> {
    match age {
        Some(a) if (MIN_AGE..=MAX_AGE).contains(&a) => Ok(a),
        _ => Err(ModelError::validation(format!(
            "Camper's age needs to be between {MIN_AGE} and {MAX_AGE}"
        ))),
    }
}

/// Validated set of fields a client may change on an existing camper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CamperChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl CamperChanges {
    /// Build from a PATCH body. Only `name` and `age` are writable; every
    /// other key is rejected, and present values must pass validation.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, ModelError> {
        let mut changes = Self::default();
        for (key, value) in body {
            match key.as_str() {
                "name" => {
                    let name = match value {
                        Value::String(s) => Some(s.as_str()),
                        Value::Null => None,
                        _ => return Err(ModelError::validation("Camper name must be a string")),
                    };
                    changes.name = Some(validate_name(name)?);
                }
                "age" => {
                    let age = match value {
                        Value::Null => None,
                        Value::Number(n) => {
                            // Out-of-range integers fall through to the age range error.
                            let parsed = n
                                .as_i64()
                                .ok_or_else(|| ModelError::validation("Camper age must be an integer"))?;
                            Some(i32::try_from(parsed).unwrap_or(i32::MAX))
                        }
                        _ => return Err(ModelError::validation("Camper age must be an integer")),
                    };
                    changes.age = Some(validate_age(age)?);
                }
                "id" | "created_at" | "updated_at" | "signups" => {
                    return Err(ModelError::validation(format!("Camper field '{key}' cannot be changed")));
                }
                other => {
                    return Err(ModelError::validation(format!("Camper has no field '{other}'")));
                }
            }
        }
        Ok(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, name: Option<&str>, age: Option<i32>) -> Result<Model, ModelError> {
    let name = validate_name(name)?;
    let age = validate_age(age)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        name: Set(name),
        age: Set(age),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Apply already-validated changes and refresh `updated_at`.
pub async fn update<C: ConnectionTrait>(db: &C, found: Model, changes: CamperChanges) -> Result<Model, ModelError> {
    if changes.is_empty() {
        return Ok(found);
    }
    let mut am: ActiveModel = found.into();
    if let Some(name) = changes.name {
        am.name = Set(validate_name(Some(&name))?);
    }
    if let Some(age) = changes.age {
        am.age = Set(validate_age(Some(age))?);
    }
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}
