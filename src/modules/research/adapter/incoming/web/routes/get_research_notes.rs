use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::research::application::ports::outgoing::ResearchListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetResearchQuery {
    /// Exact category match
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResearchListResponse {
    pub research: Vec<ResearchNote>,
}

/// List research notes
///
/// Most recently published first.
#[utoipa::path(
    get,
    path = "/api/research",
    tag = "research",
    params(GetResearchQuery),
    responses(
        (status = 200, description = "Matching research notes", body = ResearchListResponse),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/research")]
pub async fn get_research_notes_handler(
    query: web::Query<GetResearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = ResearchListFilter {
        category: query.category.filter(|c| !c.is_empty()),
        featured: query.featured,
    };

    match data.research.get_list.execute(filter).await {
        Ok(research) => ApiResponse::success(ResearchListResponse { research }),
        Err(e) => {
            error!("Failed to list research notes: {}", e);
            ApiResponse::internal_error()
        }
    }
}
