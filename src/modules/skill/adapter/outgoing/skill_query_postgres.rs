use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{Column, Entity};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError,
};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list(&self, category: Option<String>) -> Result<Vec<Skill>, SkillQueryError> {
        let mut query = Entity::find();

        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category));
        }

        let models = query
            .order_by_desc(Column::Level)
            .all(&*self.db)
            .await
            .map_err(|e| SkillQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Skill::from).collect())
    }
}
