mod get_portfolio_stats_service;

pub use get_portfolio_stats_service::GetPortfolioStatsService;
