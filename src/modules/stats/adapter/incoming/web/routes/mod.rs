pub mod get_portfolio_stats;

pub use get_portfolio_stats::get_portfolio_stats_handler;
