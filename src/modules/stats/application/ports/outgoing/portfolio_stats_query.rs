use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::PortfolioStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioStatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PortfolioStatsQuery: Send + Sync {
    async fn fetch(&self) -> Result<PortfolioStats, PortfolioStatsQueryError>;
}
