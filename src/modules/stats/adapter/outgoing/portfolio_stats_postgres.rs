use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::project::application::domain::entities::ProjectStatus;
use crate::modules::research::adapter::outgoing::sea_orm_entity::research;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::stats::application::domain::entities::PortfolioStats;
use crate::modules::stats::application::ports::outgoing::{
    PortfolioStatsQuery, PortfolioStatsQueryError,
};

/// Counts straight from the projects, research and skills tables.
#[derive(Clone)]
pub struct PortfolioStatsPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioStatsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn counts(&self) -> Result<PortfolioStats, DbErr> {
        let db = &*self.db;

        let total_projects = projects::Entity::find().count(db).await?;
        let active_projects = projects::Entity::find()
            .filter(projects::Column::Status.eq(ProjectStatus::Active.as_str()))
            .count(db)
            .await?;
        let total_research = research::Entity::find().count(db).await?;
        let total_skills = skills::Entity::find().count(db).await?;

        Ok(PortfolioStats {
            total_projects,
            active_projects,
            total_research,
            total_skills,
        })
    }
}

#[async_trait]
impl PortfolioStatsQuery for PortfolioStatsPostgres {
    async fn fetch(&self) -> Result<PortfolioStats, PortfolioStatsQueryError> {
        self.counts()
            .await
            .map_err(|e| PortfolioStatsQueryError::DatabaseError(e.to_string()))
    }
}
