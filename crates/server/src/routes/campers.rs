use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use models::{camper::CamperChanges, views::{CamperDetailView, CamperView}};
use service::{camper_service, errors::ServiceError};

use crate::{errors::ApiError, routes::{parse_id, ServerState}};

const CAMPER_MISSING: &str = "Camper does not exist";
const CAMPER_NOT_FOUND: &str = "Camper not found";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCamperInput {
    pub name: Option<String>,
    pub age: Option<i32>,
}

#[utoipa::path(
    get, path = "/campers", tag = "campers",
    responses((status = 200, description = "All campers", body = [crate::openapi::CamperDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CamperView>>, ApiError> {
    let campers = camper_service::list_campers(&state.db).await?;
    info!(count = campers.len(), "list campers");
    Ok(Json(campers.into_iter().map(CamperView::from).collect()))
}

#[utoipa::path(
    post, path = "/campers", tag = "campers",
    request_body = CreateCamperInput,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CamperDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateCamperInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let Json(input) = payload?;
    let created = camper_service::create_camper(&state.db, input.name.as_deref(), input.age).await?;
    Ok((StatusCode::CREATED, Json(CamperView::from(created))))
}

#[utoipa::path(
    get, path = "/campers/{id}", tag = "campers",
    params(("id" = i32, Path, description = "Camper ID")),
    responses(
        (status = 200, description = "Camper with signups", body = crate::openapi::CamperDetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(raw): Path<String>) -> Result<Json<CamperDetailView>, ApiError> {
    let id = parse_id(&raw).ok_or_else(|| ApiError::not_found(CAMPER_MISSING))?;
    camper_service::get_camper_detail(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(CAMPER_MISSING))
}

#[utoipa::path(
    patch, path = "/campers/{id}", tag = "campers",
    params(("id" = i32, Path, description = "Camper ID")),
    request_body = crate::openapi::UpdateCamperInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CamperDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(raw): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<CamperView>, ApiError> {
    let id = parse_id(&raw).ok_or_else(|| ApiError::not_found(CAMPER_NOT_FOUND))?;
    let Json(body) = payload?;
    // Existence is reported before field errors.
    if camper_service::get_camper(&state.db, id).await?.is_none() {
        return Err(ApiError::not_found(CAMPER_NOT_FOUND));
    }
    let changes = CamperChanges::from_json(&body).map_err(ServiceError::from)?;
    match camper_service::update_camper(&state.db, id, changes).await {
        Ok(updated) => Ok(Json(CamperView::from(updated))),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found(CAMPER_NOT_FOUND)),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    delete, path = "/campers/{id}", tag = "campers",
    params(("id" = i32, Path, description = "Camper ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(raw): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw).ok_or_else(|| ApiError::not_found(CAMPER_MISSING))?;
    if camper_service::delete_camper(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(CAMPER_MISSING))
    }
}
