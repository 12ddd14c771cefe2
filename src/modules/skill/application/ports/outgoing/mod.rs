pub mod skill_query;
pub mod skill_repository;
