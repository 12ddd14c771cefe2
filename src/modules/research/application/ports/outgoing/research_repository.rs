use async_trait::async_trait;

use crate::modules::research::application::domain::entities::ResearchNote;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResearchRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResearchRepository: Send + Sync {
    async fn count(&self) -> Result<u64, ResearchRepositoryError>;

    async fn insert_many(&self, notes: Vec<ResearchNote>) -> Result<u64, ResearchRepositoryError>;
}
