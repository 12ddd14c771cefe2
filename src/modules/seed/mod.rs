pub mod sample_data;
mod seed_service;

pub use seed_service::{SeedError, SeedReport, SeedService};
