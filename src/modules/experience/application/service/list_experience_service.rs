use async_trait::async_trait;

use crate::modules::experience::application::{
    domain::entities::Experience,
    ports::incoming::use_cases::{ListExperienceError, ListExperienceUseCase},
    ports::outgoing::ExperienceQuery,
};

#[derive(Debug, Clone)]
pub struct ListExperienceService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> ListExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListExperienceUseCase for ListExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, ListExperienceError> {
        self.query.list().await.map_err(ListExperienceError::from)
    }
}
