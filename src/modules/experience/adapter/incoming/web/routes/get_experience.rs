use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::experience::application::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceListResponse {
    pub experience: Vec<Experience>,
}

/// List experience entries
///
/// Current positions come first.
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (status = 200, description = "Experience entries", body = ExperienceListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_experience.execute().await {
        Ok(experience) => ApiResponse::success(ExperienceListResponse { experience }),
        Err(e) => {
            error!("Failed to list experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
