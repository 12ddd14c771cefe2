use async_trait::async_trait;

use crate::modules::research::application::domain::entities::ResearchNote;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResearchListFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResearchQueryError {
    #[error("Research note not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ResearchQuery: Send + Sync {
    async fn get_by_id(&self, research_id: &str) -> Result<ResearchNote, ResearchQueryError>;

    /// Matching notes, most recently published first.
    async fn list(&self, filter: ResearchListFilter)
        -> Result<Vec<ResearchNote>, ResearchQueryError>;
}
