use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{ActiveModel, Entity};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn count(&self) -> Result<u64, SkillRepositoryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| SkillRepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert_many(&self, skills: Vec<Skill>) -> Result<u64, SkillRepositoryError> {
        if skills.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(skills.into_iter().map(ActiveModel::from))
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| SkillRepositoryError::DatabaseError(e.to_string()))
    }
}
