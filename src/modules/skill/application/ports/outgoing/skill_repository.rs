use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn count(&self) -> Result<u64, SkillRepositoryError>;

    async fn insert_many(&self, skills: Vec<Skill>) -> Result<u64, SkillRepositoryError>;
}
