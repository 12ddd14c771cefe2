mod portfolio_stats_query;

pub use portfolio_stats_query::{PortfolioStatsQuery, PortfolioStatsQueryError};
