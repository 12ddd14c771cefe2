use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::research::application::ports::outgoing::{
    ResearchListFilter, ResearchQuery, ResearchQueryError,
};

// SeaORM entity
use super::sea_orm_entity::research::{
    Column as ResearchColumn, Entity as ResearchEntity, Model as ResearchModel,
};

#[derive(Debug, Clone)]
pub struct ResearchQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResearchQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResearchQuery for ResearchQueryPostgres {
    async fn get_by_id(&self, research_id: &str) -> Result<ResearchNote, ResearchQueryError> {
        let model = ResearchEntity::find_by_id(research_id.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| ResearchQueryError::DatabaseError(e.to_string()))?
            .ok_or(ResearchQueryError::NotFound)?;

        to_note(&model)
    }

    async fn list(
        &self,
        filter: ResearchListFilter,
    ) -> Result<Vec<ResearchNote>, ResearchQueryError> {
        let mut query = ResearchEntity::find();

        if let Some(category) = filter.category {
            query = query.filter(ResearchColumn::Category.eq(category));
        }

        if let Some(featured) = filter.featured {
            query = query.filter(ResearchColumn::Featured.eq(featured));
        }

        let models: Vec<ResearchModel> = query
            .order_by_desc(ResearchColumn::DatePublished)
            .all(&*self.db)
            .await
            .map_err(|e| ResearchQueryError::DatabaseError(e.to_string()))?;

        models.iter().map(to_note).collect()
    }
}

fn to_note(model: &ResearchModel) -> Result<ResearchNote, ResearchQueryError> {
    model
        .to_domain()
        .map_err(|e| ResearchQueryError::SerializationError(e.to_string()))
}
