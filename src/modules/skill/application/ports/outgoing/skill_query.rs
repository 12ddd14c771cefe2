use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// Skills in the given category (all when `None`), highest level first.
    async fn list(&self, category: Option<String>) -> Result<Vec<Skill>, SkillQueryError>;
}
