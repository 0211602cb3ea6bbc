use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::views::{ActivityView, SignupView};
use service::signup_service;

use crate::{errors::ApiError, routes::ServerState};

/// Extra keys are ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateSignupInput {
    pub camper_id: Option<i32>,
    pub activity_id: Option<i32>,
    pub time: Option<i32>,
}

#[utoipa::path(
    get, path = "/signups", tag = "signups",
    responses((status = 200, description = "All signups", body = [crate::openapi::SignupDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<SignupView>>, ApiError> {
    let signups = signup_service::list_signups(&state.db).await?;
    info!(count = signups.len(), "list signups");
    Ok(Json(signups.into_iter().map(SignupView::from).collect()))
}

/// Responds with the activity the camper was signed up for.
#[utoipa::path(
    post, path = "/signups", tag = "signups",
    request_body = CreateSignupInput,
    responses(
        (status = 200, description = "Signed up; returns the activity", body = crate::openapi::ActivityDoc),
        (status = 400, description = "Validation error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateSignupInput>, JsonRejection>,
) -> Result<Json<ActivityView>, ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::bad_request(signup_service::LINK_ERROR))?;
    let activity = signup_service::create_signup(&state.db, input.camper_id, input.activity_id, input.time).await?;
    Ok(Json(ActivityView::from(activity)))
}
