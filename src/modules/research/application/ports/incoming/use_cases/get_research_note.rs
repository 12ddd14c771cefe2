use async_trait::async_trait;

use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::research::application::ports::outgoing::ResearchQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResearchNoteError {
    #[error("Research note not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResearchQueryError> for GetResearchNoteError {
    fn from(err: ResearchQueryError) -> Self {
        match err {
            ResearchQueryError::NotFound => GetResearchNoteError::NotFound,
            other => GetResearchNoteError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetResearchNoteUseCase: Send + Sync {
    async fn execute(&self, research_id: &str) -> Result<ResearchNote, GetResearchNoteError>;
}
