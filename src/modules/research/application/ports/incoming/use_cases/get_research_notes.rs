use async_trait::async_trait;

use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::research::application::ports::outgoing::{
    ResearchListFilter, ResearchQueryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResearchNotesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ResearchQueryError> for GetResearchNotesError {
    fn from(err: ResearchQueryError) -> Self {
        GetResearchNotesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetResearchNotesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ResearchListFilter,
    ) -> Result<Vec<ResearchNote>, GetResearchNotesError>;
}
