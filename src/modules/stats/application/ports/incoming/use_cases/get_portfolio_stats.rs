use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::PortfolioStats;
use crate::modules::stats::application::ports::outgoing::PortfolioStatsQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PortfolioStatsQueryError> for GetPortfolioStatsError {
    fn from(err: PortfolioStatsQueryError) -> Self {
        GetPortfolioStatsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetPortfolioStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioStats, GetPortfolioStatsError>;
}
