use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::PortfolioStats;
use crate::modules::stats::application::ports::incoming::use_cases::{
    GetPortfolioStatsError, GetPortfolioStatsUseCase,
};
use crate::modules::stats::application::ports::outgoing::PortfolioStatsQuery;

pub struct GetPortfolioStatsService<Q>
where
    Q: PortfolioStatsQuery,
{
    query: Q,
}

impl<Q> GetPortfolioStatsService<Q>
where
    Q: PortfolioStatsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioStatsUseCase for GetPortfolioStatsService<Q>
where
    Q: PortfolioStatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioStats, GetPortfolioStatsError> {
        Ok(self.query.fetch().await?)
    }
}
