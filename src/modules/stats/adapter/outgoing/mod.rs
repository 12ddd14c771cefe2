mod portfolio_stats_postgres;

pub use portfolio_stats_postgres::PortfolioStatsPostgres;
