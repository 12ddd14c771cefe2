use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListExperienceError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for ListExperienceError {
    fn from(err: ExperienceQueryError) -> Self {
        ListExperienceError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, ListExperienceError>;
}
