use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::research::application::ports::incoming::use_cases::GetResearchNoteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/research/{research_id}",
    tag = "research",
    params(("research_id" = String, Path, description = "Research note identifier")),
    responses(
        (status = 200, description = "The research note", body = ResearchNote),
        (status = 404, description = "Research note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/research/{research_id}")]
pub async fn get_research_note_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let research_id = path.into_inner();

    match data.research.get_single.execute(&research_id).await {
        Ok(note) => ApiResponse::success(note),
        Err(GetResearchNoteError::NotFound) => {
            ApiResponse::not_found("RESEARCH_NOT_FOUND", "Research note not found")
        }
        Err(GetResearchNoteError::RepositoryError(msg)) => {
            error!("Repository error fetching research id={}: {}", research_id, msg);
            ApiResponse::internal_error()
        }
    }
}
