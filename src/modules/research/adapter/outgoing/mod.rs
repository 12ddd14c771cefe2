mod research_query_postgres;
mod research_repository_postgres;
pub mod sea_orm_entity;

pub use research_query_postgres::ResearchQueryPostgres;
pub use research_repository_postgres::ResearchRepositoryPostgres;
