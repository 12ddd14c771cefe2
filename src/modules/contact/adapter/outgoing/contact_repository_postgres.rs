use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use super::sea_orm_entity::contact::{ActiveModel, Entity};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactRepository, ContactRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn insert(&self, message: ContactMessage) -> Result<(), ContactRepositoryError> {
        Entity::insert(ActiveModel::from(message))
            .exec_without_returning(&*self.db)
            .await
            .map(|_| ())
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))
    }
}
