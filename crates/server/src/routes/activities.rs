use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::views::ActivityView;
use service::activity_service;

use crate::{errors::ApiError, routes::{parse_id, ServerState}};

const ACTIVITY_MISSING: &str = "Activity not found";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateActivityInput {
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}

#[utoipa::path(
    get, path = "/activities", tag = "activities",
    responses((status = 200, description = "All activities", body = [crate::openapi::ActivityDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ActivityView>>, ApiError> {
    let activities = activity_service::list_activities(&state.db).await?;
    info!(count = activities.len(), "list activities");
    Ok(Json(activities.into_iter().map(ActivityView::from).collect()))
}

#[utoipa::path(
    post, path = "/activities", tag = "activities",
    request_body = CreateActivityInput,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ActivityDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateActivityInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ActivityView>), ApiError> {
    let Json(input) = payload?;
    let created = activity_service::create_activity(&state.db, input.name.as_deref(), input.difficulty).await?;
    Ok((StatusCode::CREATED, Json(ActivityView::from(created))))
}

#[utoipa::path(
    get, path = "/activities/{id}", tag = "activities",
    params(("id" = i32, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ActivityDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(raw): Path<String>) -> Result<Json<ActivityView>, ApiError> {
    let missing = || ApiError::not_found(format!("No activity exists with id {raw}"));
    let id = parse_id(&raw).ok_or_else(missing)?;
    activity_service::get_activity(&state.db, id)
        .await?
        .map(|a| Json(ActivityView::from(a)))
        .ok_or_else(missing)
}

#[utoipa::path(
    delete, path = "/activities/{id}", tag = "activities",
    params(("id" = i32, Path, description = "Activity ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(raw): Path<String>) -> Result<StatusCode, ApiError> {
    let Some(id) = parse_id(&raw) else {
        return Err(ApiError::not_found(ACTIVITY_MISSING));
    };
    if activity_service::delete_activity(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(ACTIVITY_MISSING))
    }
}
