mod research_query;
mod research_repository;

#[cfg(test)]
pub use research_repository::MockResearchRepository;
pub use research_query::{ResearchListFilter, ResearchQuery, ResearchQueryError};
pub use research_repository::{ResearchRepository, ResearchRepositoryError};
