use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod activities;
pub mod campers;
pub mod signups;

/// Per-request handlers borrow the pooled connection from here.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

/// Path ids that cannot name a row (non-numeric, out of `i32` range) parse to
/// `None`, and the caller answers with its not-found body.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

pub async fn index() -> &'static str {
    ""
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/campers", get(campers::list).post(campers::create))
        .route(
            "/campers/:id",
            get(campers::get).patch(campers::update).delete(campers::delete),
        )
        .route("/activities", get(activities::list).post(activities::create))
        .route("/activities/:id", get(activities::get).delete(activities::delete))
        .route("/signups", get(signups::list).post(signups::create));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
