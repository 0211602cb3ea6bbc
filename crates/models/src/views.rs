//! Response projections.
//!
//! Each view is a fixed field set for one rendering context. Views only ever
//! hold scalars or other views whose fields are scalars, so nesting depth is
//! bounded by the types themselves and no relationship cycle can be expanded.
use serde::{Deserialize, Serialize};

use crate::{activity, camper, signup};

/// `{id, name, difficulty}`; an activity never embeds its signups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityView {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}

impl From<activity::Model> for ActivityView {
    fn from(m: activity::Model) -> Self {
        Self { id: m.id, name: m.name, difficulty: m.difficulty }
    }
}

/// List context: `{id, name, age}`. Timestamps and signups are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamperView {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl From<&camper::Model> for CamperView {
    fn from(m: &camper::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), age: m.age }
    }
}

impl From<camper::Model> for CamperView {
    fn from(m: camper::Model) -> Self {
        Self { id: m.id, name: m.name, age: m.age }
    }
}

/// Detail context for a single camper: `{id, age, name, signups}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamperDetailView {
    pub id: i32,
    pub age: i32,
    pub name: String,
    pub signups: Vec<SignupView>,
}

impl CamperDetailView {
    pub fn new(camper: &camper::Model, signups: &[signup::Model]) -> Self {
        Self {
            id: camper.id,
            age: camper.age,
            name: camper.name.clone(),
            signups: signups.iter().map(SignupView::from).collect(),
        }
    }
}

/// `{id, time, activity_id, camper_id}`; related rows appear only as keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupView {
    pub id: i32,
    pub time: Option<i32>,
    pub activity_id: i32,
    pub camper_id: i32,
}

impl From<&signup::Model> for SignupView {
    fn from(m: &signup::Model) -> Self {
        Self { id: m.id, time: m.time, activity_id: m.activity_id, camper_id: m.camper_id }
    }
}

impl From<signup::Model> for SignupView {
    fn from(m: signup::Model) -> Self {
        Self::from(&m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn camper(id: i32) -> camper::Model {
        let now = Utc::now().into();
        camper::Model { id, name: "Alex".into(), age: 12, created_at: now, updated_at: now }
    }

    fn signup(id: i32, camper_id: i32) -> signup::Model {
        let now = Utc::now().into();
        signup::Model { id, time: Some(9), camper_id, activity_id: 4, created_at: now, updated_at: now }
    }

    #[test]
    fn camper_list_view_omits_timestamps_and_signups() {
        let json = serde_json::to_value(CamperView::from(&camper(1))).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Alex", "age": 12}));
    }

    #[test]
    fn camper_detail_view_nests_signup_keys_only() {
        let view = CamperDetailView::new(&camper(1), &[signup(7, 1)]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "age": 12,
                "name": "Alex",
                "signups": [{"id": 7, "time": 9, "activity_id": 4, "camper_id": 1}]
            })
        );
        let nested = json["signups"][0].as_object().unwrap();
        assert!(!nested.contains_key("camper"));
        assert!(!nested.contains_key("activity"));
    }

    #[test]
    fn camper_detail_field_order_is_fixed() {
        let text = serde_json::to_string(&CamperDetailView::new(&camper(3), &[])).unwrap();
        assert_eq!(text, r#"{"id":3,"age":12,"name":"Alex","signups":[]}"#);
    }

    #[test]
    fn activity_view_has_three_fields() {
        let now = Utc::now().into();
        let m = activity::Model { id: 2, name: "Archery".into(), difficulty: 3, created_at: now, updated_at: now };
        let text = serde_json::to_string(&ActivityView::from(m)).unwrap();
        assert_eq!(text, r#"{"id":2,"name":"Archery","difficulty":3}"#);
    }

    #[test]
    fn signup_view_keeps_null_time() {
        let mut s = signup(5, 2);
        s.time = None;
        let json = serde_json::to_value(SignupView::from(s)).unwrap();
        assert_eq!(json, serde_json::json!({"id": 5, "time": null, "activity_id": 4, "camper_id": 2}));
    }
}
