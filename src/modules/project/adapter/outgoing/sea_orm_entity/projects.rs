use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::project::application::domain::entities::{Project, ProjectStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub long_description: String,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    pub featured: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(&self) -> Result<Project, serde_json::Error> {
        Ok(Project {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            long_description: self.long_description.clone(),
            technologies: serde_json::from_value(self.technologies.clone())?,
            status: ProjectStatus::from(self.status.clone()),
            github_url: self.github_url.clone(),
            demo_url: self.demo_url.clone(),
            image_url: self.image_url.clone(),
            category: self.category.clone(),
            featured: self.featured,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

impl From<Project> for ActiveModel {
    fn from(project: Project) -> Self {
        ActiveModel {
            id: Set(project.id),
            title: Set(project.title),
            description: Set(project.description),
            long_description: Set(project.long_description),
            technologies: Set(serde_json::json!(project.technologies)),
            status: Set(project.status.into()),
            github_url: Set(project.github_url),
            demo_url: Set(project.demo_url),
            image_url: Set(project.image_url),
            category: Set(project.category),
            featured: Set(project.featured),
            created_at: Set(project.created_at.fixed_offset()),
            updated_at: Set(project.updated_at.fixed_offset()),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
