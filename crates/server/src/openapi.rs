//! OpenAPI document. Response schemas mirror the views in `models::views`.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct ActivityDoc { pub id: i32, pub name: String, pub difficulty: i32 }

#[derive(ToSchema)]
pub struct CamperDoc { pub id: i32, pub name: String, pub age: i32 }

#[derive(ToSchema)]
pub struct SignupDoc { pub id: i32, pub time: Option<i32>, pub activity_id: i32, pub camper_id: i32 }

#[derive(ToSchema)]
pub struct CamperDetailDoc { pub id: i32, pub age: i32, pub name: String, pub signups: Vec<SignupDoc> }

/// Only these fields may be sent in a PATCH.
#[derive(ToSchema)]
pub struct UpdateCamperInputDoc { pub name: Option<String>, pub age: Option<i32> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::campers::list,
        crate::routes::campers::create,
        crate::routes::campers::get,
        crate::routes::campers::update,
        crate::routes::campers::delete,
        crate::routes::activities::list,
        crate::routes::activities::create,
        crate::routes::activities::get,
        crate::routes::activities::delete,
        crate::routes::signups::list,
        crate::routes::signups::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ActivityDoc,
            CamperDoc,
            SignupDoc,
            CamperDetailDoc,
            UpdateCamperInputDoc,
            crate::routes::campers::CreateCamperInput,
            crate::routes::activities::CreateActivityInput,
            crate::routes::signups::CreateSignupInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "campers"),
        (name = "activities"),
        (name = "signups")
    )
)]
pub struct ApiDoc;
