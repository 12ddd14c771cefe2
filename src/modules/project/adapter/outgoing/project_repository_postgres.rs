use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{ActiveModel, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn count(&self) -> Result<u64, ProjectRepositoryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert_many(&self, projects: Vec<Project>) -> Result<u64, ProjectRepositoryError> {
        if projects.is_empty() {
            return Ok(0);
        }

        let models: Vec<ActiveModel> = projects.into_iter().map(ActiveModel::from).collect();

        Entity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))
    }
}
