use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_query::SkillQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for ListSkillsError {
    fn from(err: SkillQueryError) -> Self {
        ListSkillsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self, category: Option<String>) -> Result<Vec<Skill>, ListSkillsError>;
}
