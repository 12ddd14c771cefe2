use async_trait::async_trait;

use crate::modules::research::application::{
    domain::entities::ResearchNote,
    ports::incoming::use_cases::{GetResearchNotesError, GetResearchNotesUseCase},
    ports::outgoing::{ResearchListFilter, ResearchQuery},
};

#[derive(Debug, Clone)]
pub struct GetResearchNotesService<Q>
where
    Q: ResearchQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetResearchNotesService<Q>
where
    Q: ResearchQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResearchNotesUseCase for GetResearchNotesService<Q>
where
    Q: ResearchQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ResearchListFilter,
    ) -> Result<Vec<ResearchNote>, GetResearchNotesError> {
        self.query
            .list(filter)
            .await
            .map_err(GetResearchNotesError::from)
    }
}
