use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;

use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::research::application::ports::outgoing::{
    ResearchRepository, ResearchRepositoryError,
};

use super::sea_orm_entity::research::{ActiveModel as ResearchActiveModel, Entity as ResearchEntity};

#[derive(Debug, Clone)]
pub struct ResearchRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResearchRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResearchRepository for ResearchRepositoryPostgres {
    async fn count(&self) -> Result<u64, ResearchRepositoryError> {
        ResearchEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| ResearchRepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert_many(&self, notes: Vec<ResearchNote>) -> Result<u64, ResearchRepositoryError> {
        if notes.is_empty() {
            return Ok(0);
        }

        ResearchEntity::insert_many(notes.into_iter().map(ResearchActiveModel::from))
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| ResearchRepositoryError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    use crate::tests::support::fixtures::sample_research_note;

    #[tokio::test]
    async fn test_count_empty_collection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items".to_string(),
                Value::BigInt(Some(0)),
            )])]])
            .into_connection();

        let repo = ResearchRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_many_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ResearchRepositoryPostgres::new(Arc::new(db));
        let inserted = repo
            .insert_many(vec![sample_research_note("jarviss-ai-brain", "J.A.R.V.I.S.")])
            .await
            .unwrap();

        assert_eq!(inserted, 1);
    }
}
