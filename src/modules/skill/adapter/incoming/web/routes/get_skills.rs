use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::modules::skill::application::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetSkillsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillListResponse {
    pub skills: Vec<Skill>,
}

/// List skills, highest level first
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(GetSkillsQuery),
    responses(
        (status = 200, description = "Skills", body = SkillListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    query: web::Query<GetSkillsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = query.into_inner().category.filter(|c| !c.is_empty());

    match data.list_skills.execute(category).await {
        Ok(skills) => ApiResponse::success(SkillListResponse { skills }),
        Err(e) => {
            error!("Failed to list skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
