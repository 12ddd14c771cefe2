use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::stats::application::domain::entities::PortfolioStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio-stats",
    tag = "stats",
    responses(
        (status = 200, description = "Current collection counts", body = PortfolioStats),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/portfolio-stats")]
pub async fn get_portfolio_stats_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio_stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!("Failed to compute portfolio stats: {}", e);
            ApiResponse::internal_error()
        }
    }
}
