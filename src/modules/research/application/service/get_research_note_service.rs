use async_trait::async_trait;

use crate::modules::research::application::{
    domain::entities::ResearchNote,
    ports::incoming::use_cases::{GetResearchNoteError, GetResearchNoteUseCase},
    ports::outgoing::ResearchQuery,
};

#[derive(Debug, Clone)]
pub struct GetResearchNoteService<Q>
where
    Q: ResearchQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetResearchNoteService<Q>
where
    Q: ResearchQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResearchNoteUseCase for GetResearchNoteService<Q>
where
    Q: ResearchQuery + Send + Sync,
{
    async fn execute(&self, research_id: &str) -> Result<ResearchNote, GetResearchNoteError> {
        self.query
            .get_by_id(research_id)
            .await
            .map_err(GetResearchNoteError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::research::application::ports::outgoing::{
        ResearchListFilter, ResearchQueryError,
    };
    use crate::tests::support::fixtures::sample_research_note;

    #[derive(Clone)]
    struct MockResearchQuery {
        result: Result<ResearchNote, ResearchQueryError>,
    }

    #[async_trait]
    impl ResearchQuery for MockResearchQuery {
        async fn get_by_id(&self, _research_id: &str) -> Result<ResearchNote, ResearchQueryError> {
            self.result.clone()
        }

        async fn list(
            &self,
            _filter: ResearchListFilter,
        ) -> Result<Vec<ResearchNote>, ResearchQueryError> {
            unimplemented!("not used in single note tests")
        }
    }

    #[tokio::test]
    async fn test_get_research_note_success() {
        let service = GetResearchNoteService::new(MockResearchQuery {
            result: Ok(sample_research_note("jarviss-ai-brain", "J.A.R.V.I.S.")),
        });

        let note = service.execute("jarviss-ai-brain").await.unwrap();

        assert_eq!(note.id, "jarviss-ai-brain");
    }

    #[tokio::test]
    async fn test_get_research_note_not_found() {
        let service = GetResearchNoteService::new(MockResearchQuery {
            result: Err(ResearchQueryError::NotFound),
        });

        let result = service.execute("missing").await;

        assert!(matches!(result, Err(GetResearchNoteError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_research_note_serialization_error() {
        let service = GetResearchNoteService::new(MockResearchQuery {
            result: Err(ResearchQueryError::SerializationError("bad tags".to_string())),
        });

        let result = service.execute("jarviss-ai-brain").await;

        assert!(matches!(
            result,
            Err(GetResearchNoteError::RepositoryError(_))
        ));
    }
}
