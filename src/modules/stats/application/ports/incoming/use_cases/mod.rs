mod get_portfolio_stats;

pub use get_portfolio_stats::{GetPortfolioStatsError, GetPortfolioStatsUseCase};
